//! Request and response shapes for the advisory backend.
//!
//! Field names match the backend's JSON verbatim; everything the frontend
//! does not consume is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Body for `POST /advisory`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryRequest {
    pub state: String,
    pub river_name: String,
}

/// One per-species advisory record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryWire {
    pub species: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    /// Raw zone string; classified client-side
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub fishing_advisory: String,
    #[serde(default)]
    pub recommended_gear: String,
    #[serde(default)]
    pub economic_note: String,
    #[serde(default)]
    pub river_name: String,
}

/// Response body for `POST /advisory`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdvisoryListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub river_name: Option<String>,
    #[serde(default)]
    pub advisories: Vec<AdvisoryWire>,
}

/// Response body for `GET /states`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub states: Vec<String>,
}

/// Response body for `GET /rivers?state=...`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiversResponse {
    #[serde(default)]
    pub rivers: Vec<String>,
}

/// Body for `POST /heatmap`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRequest {
    pub state: String,
    pub river_name: String,
}

/// A geo-tagged intensity value for the density map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub value: f64,
}

/// Response body for `POST /heatmap`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeatmapResponse {
    #[serde(default)]
    pub points: Vec<RiskPoint>,
}

/// FastAPI-style error body: `{ "detail": "..." }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisory_response_ignores_extra_fields() {
        let body = r#"{
            "success": true,
            "count": 1,
            "state": "Kerala",
            "river_name": "Periyar",
            "advisories": [{
                "species": "Hilsa",
                "latitude": 9.97,
                "longitude": 76.28,
                "zone": "Red",
                "risk_factors": ["High juvenile density"],
                "fishing_advisory": "Prohibited during breeding season.",
                "recommended_gear": "Seine nets with larger mesh size",
                "economic_note": "Value: 200-300 per kg",
                "river_name": "Periyar"
            }]
        }"#;
        let parsed: AdvisoryListResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.river_name.as_deref(), Some("Periyar"));
        assert_eq!(parsed.advisories.len(), 1);
        assert_eq!(parsed.advisories[0].species, "Hilsa");
        assert_eq!(parsed.advisories[0].zone, "Red");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let body = r#"{"advisories": [{"species": "Rohu"}]}"#;
        let parsed: AdvisoryListResponse = serde_json::from_str(body).unwrap();
        assert!(!parsed.success);
        let record = &parsed.advisories[0];
        assert_eq!(record.species, "Rohu");
        assert_eq!(record.zone, "");
        assert!(record.risk_factors.is_empty());
        assert_eq!(record.latitude, 0.0);
    }

    #[test]
    fn test_heatmap_points_parse() {
        let body = r#"{"success": true, "count": 2, "points": [
            {"lat": 9.9, "lon": 76.2, "value": 0.8},
            {"lat": 10.0, "lon": 76.3, "value": 0.2}
        ]}"#;
        let parsed: HeatmapResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.points.len(), 2);
        assert!((parsed.points[0].value - 0.8).abs() < f64::EPSILON);
    }
}
