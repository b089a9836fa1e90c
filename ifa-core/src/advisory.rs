//! Display-side advisory records derived from backend responses.

use crate::wire::{AdvisoryListResponse, AdvisoryWire};
use crate::zone::Zone;
use serde::Serialize;

/// A per-species advisory projected for display.
///
/// The backend supplies a single `species` string; it is mirrored into both
/// `name` and `scientific_name` since no separate common name exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesAdvisory {
    pub name: String,
    pub scientific_name: String,
    pub zone: Zone,
    pub latitude: f64,
    pub longitude: f64,
    pub risk_factors: Vec<String>,
    pub fishing_advisory: String,
    pub recommended_gear: String,
    pub economic_note: String,
}

impl From<AdvisoryWire> for SpeciesAdvisory {
    fn from(wire: AdvisoryWire) -> Self {
        let zone = Zone::classify(&wire.zone);
        SpeciesAdvisory {
            name: wire.species.clone(),
            scientific_name: wire.species,
            zone,
            latitude: wire.latitude,
            longitude: wire.longitude,
            risk_factors: wire.risk_factors,
            fishing_advisory: wire.fishing_advisory,
            recommended_gear: wire.recommended_gear,
            economic_note: wire.economic_note,
        }
    }
}

/// The result of one advisory query; lives for a single query-response
/// cycle and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub river_name: String,
    pub overall_zone: Zone,
    pub species: Vec<SpeciesAdvisory>,
}

impl AggregateResult {
    /// Project a backend response into the display shape, computing the
    /// overall zone from the per-species zones. The backend may omit
    /// `river_name`; the requested river fills the gap.
    pub fn from_response(response: AdvisoryListResponse, requested_river: &str) -> AggregateResult {
        let river_name = response
            .river_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| requested_river.to_string());
        let species: Vec<SpeciesAdvisory> = response
            .advisories
            .into_iter()
            .map(SpeciesAdvisory::from)
            .collect();
        let overall_zone = Zone::overall(species.iter().map(|s| s.zone));
        AggregateResult {
            river_name,
            overall_zone,
            species,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(species: &str, zone: &str) -> AdvisoryWire {
        AdvisoryWire {
            species: species.to_string(),
            latitude: 9.97,
            longitude: 76.28,
            zone: zone.to_string(),
            risk_factors: vec!["High juvenile density".to_string()],
            fishing_advisory: "Regulated fishing allowed.".to_string(),
            recommended_gear: "Cast nets".to_string(),
            economic_note: "Important food fish".to_string(),
            river_name: "Periyar".to_string(),
        }
    }

    #[test]
    fn test_species_name_is_duplicated() {
        let advisory = SpeciesAdvisory::from(wire("Tenualosa ilisha", "Red"));
        assert_eq!(advisory.name, "Tenualosa ilisha");
        assert_eq!(advisory.scientific_name, "Tenualosa ilisha");
        assert_eq!(advisory.zone, Zone::Red);
    }

    #[test]
    fn test_aggregate_overall_zone() {
        let response = AdvisoryListResponse {
            success: true,
            river_name: Some("Periyar".to_string()),
            advisories: vec![wire("Rohu", "Green"), wire("Hilsa", "Red"), wire("Pabda", "Yellow")],
        };
        let result = AggregateResult::from_response(response, "Periyar");
        assert_eq!(result.overall_zone, Zone::Red);
        assert_eq!(result.species.len(), 3);
        assert_eq!(result.river_name, "Periyar");
    }

    #[test]
    fn test_empty_species_list_is_unknown_not_error() {
        let response = AdvisoryListResponse {
            success: true,
            river_name: None,
            advisories: Vec::new(),
        };
        let result = AggregateResult::from_response(response, "Ganga");
        assert_eq!(result.overall_zone, Zone::Unknown);
        assert!(result.species.is_empty());
        assert_eq!(result.river_name, "Ganga");
    }

    #[test]
    fn test_missing_river_name_falls_back_to_request() {
        let response = AdvisoryListResponse {
            success: true,
            river_name: Some(String::new()),
            advisories: vec![wire("Rohu", "low")],
        };
        let result = AggregateResult::from_response(response, "Kaveri");
        assert_eq!(result.river_name, "Kaveri");
        assert_eq!(result.overall_zone, Zone::Green);
    }
}
