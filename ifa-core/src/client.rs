//! Typed HTTP client for the advisory backend.
//!
//! Candidate lookups degrade to the embedded fallback tables on any
//! failure (network error, timeout, non-2xx, empty list); the submission
//! and heatmap paths surface typed errors instead.

use log::{info, warn};
use reqwest::Client;

use crate::advisory::AggregateResult;
use crate::error::{AdvisoryError, Result};
use crate::fallback;
use crate::location::LocationSelection;
use crate::wire::{
    AdvisoryListResponse, AdvisoryRequest, ErrorBody, HeatmapRequest, HeatmapResponse, RiskPoint,
    RiversResponse, StatesResponse,
};

/// Timeout for backend calls on native targets. Exceeding it degrades
/// exactly like a network failure. The WASM transport has no builder
/// timeout and keeps the browser default.
const REQUEST_TIMEOUT_SECS: u64 = 8;

fn build_client() -> Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(client) = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
        {
            return client;
        }
    }
    Client::new()
}

/// Client for the advisory backend endpoints.
///
/// Repeated calls with the same inputs are idempotent: under stable
/// network conditions they return the same lists or degrade identically.
pub struct AdvisoryApi {
    base_url: String,
    client: Client,
}

impl AdvisoryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        AdvisoryApi {
            base_url,
            client: build_client(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the selectable states, falling back to the embedded list.
    /// Never empty.
    pub async fn states(&self) -> Vec<String> {
        match self.get_states().await {
            Ok(states) if !states.is_empty() => states,
            Ok(_) => {
                warn!("states lookup returned an empty list, using fallback");
                fallback::states()
            }
            Err(e) => {
                warn!("states lookup failed ({e}), using fallback");
                fallback::states()
            }
        }
    }

    /// Fetch the rivers for a state, falling back to the embedded table.
    /// May legitimately be empty for a state with no fallback entry.
    pub async fn rivers(&self, state: &str) -> Vec<String> {
        if state.trim().is_empty() {
            return Vec::new();
        }
        match self.get_rivers(state).await {
            Ok(rivers) if !rivers.is_empty() => rivers,
            Ok(_) => {
                warn!("river lookup for {state} returned an empty list, using fallback");
                fallback::rivers_for(state)
            }
            Err(e) => {
                warn!("river lookup for {state} failed ({e}), using fallback");
                fallback::rivers_for(state)
            }
        }
    }

    async fn get_states(&self) -> Result<Vec<String>> {
        let url = format!("{}/states", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(read_failure(response).await);
        }
        let body: StatesResponse = response
            .json()
            .await
            .map_err(|e| AdvisoryError::ResponseParse(e.to_string()))?;
        if !body.success {
            return Err(AdvisoryError::ResponseParse(
                "backend reported success=false".to_string(),
            ));
        }
        Ok(body.states)
    }

    async fn get_rivers(&self, state: &str) -> Result<Vec<String>> {
        let url = format!("{}/rivers", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("state", state)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(read_failure(response).await);
        }
        let body: RiversResponse = response
            .json()
            .await
            .map_err(|e| AdvisoryError::ResponseParse(e.to_string()))?;
        Ok(body.rivers)
    }

    /// Submit an advisory query for a committed location.
    ///
    /// Validation happens before any network traffic; the response is
    /// projected into an `AggregateResult` with the overall zone computed
    /// client-side.
    pub async fn submit(&self, selection: &LocationSelection) -> Result<AggregateResult> {
        selection.validate()?;
        let request = AdvisoryRequest {
            state: selection.state.clone(),
            river_name: selection.river.clone(),
        };
        info!(
            "submitting advisory query for {} / {}",
            request.state, request.river_name
        );
        let url = format!("{}/advisory", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(read_failure(response).await);
        }
        let body: AdvisoryListResponse = response
            .json()
            .await
            .map_err(|e| AdvisoryError::ResponseParse(e.to_string()))?;
        Ok(AggregateResult::from_response(body, &selection.river))
    }

    /// Fetch the spatial risk points for a committed location. Zero points
    /// is a valid, displayable result.
    pub async fn heatmap(&self, selection: &LocationSelection) -> Result<Vec<RiskPoint>> {
        selection.validate()?;
        let request = HeatmapRequest {
            state: selection.state.clone(),
            river_name: selection.river.clone(),
        };
        let url = format!("{}/heatmap", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(read_failure(response).await);
        }
        let body: HeatmapResponse = response
            .json()
            .await
            .map_err(|e| AdvisoryError::ResponseParse(e.to_string()))?;
        info!(
            "heatmap returned {} points for {} / {}",
            body.points.len(),
            request.state,
            request.river_name
        );
        Ok(body.points)
    }
}

/// Turn a non-2xx response into a `RequestFailed`, carrying the backend's
/// `detail` message when it supplies one.
async fn read_failure(response: reqwest::Response) -> AdvisoryError {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            detail: Some(detail),
        }) if !detail.is_empty() => detail,
        _ => format!("advisory backend returned status {status}"),
    };
    AdvisoryError::RequestFailed { status, message }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    // Nothing listens on this address; every call fails at the transport
    // layer, exercising the degradation paths without a live backend.
    const DEAD_BASE: &str = "http://127.0.0.1:9";

    #[tokio::test]
    async fn test_submit_rejects_incomplete_selection_without_network() {
        let api = AdvisoryApi::new(DEAD_BASE);
        for selection in [
            LocationSelection::new("", "Ganga"),
            LocationSelection::new("Kerala", ""),
        ] {
            let err = api.submit(&selection).await.unwrap_err();
            assert!(matches!(err, AdvisoryError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_submit_transport_failure_is_backend_unavailable() {
        let api = AdvisoryApi::new(DEAD_BASE);
        let selection = LocationSelection::new("Kerala", "Periyar");
        let err = api.submit(&selection).await.unwrap_err();
        assert!(matches!(err, AdvisoryError::BackendUnavailable(_)));
    }

    #[tokio::test]
    async fn test_candidate_lookups_fall_back() {
        let api = AdvisoryApi::new(DEAD_BASE);

        let states = api.states().await;
        assert_eq!(states, fallback::states());

        let rivers = api.rivers("Kerala").await;
        assert_eq!(rivers, fallback::rivers_for("Kerala"));
        assert!(!rivers.is_empty());

        // Unknown scope degrades to an empty list, not an error
        assert!(api.rivers("Atlantis").await.is_empty());
    }

    #[tokio::test]
    async fn test_scopeless_river_lookup_never_fetches() {
        let api = AdvisoryApi::new(DEAD_BASE);
        assert!(api.rivers("").await.is_empty());
        assert!(api.rivers("   ").await.is_empty());
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let api = AdvisoryApi::new("http://localhost:8000/");
        assert_eq!(api.base_url(), "http://localhost:8000");
    }
}
