//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use ifa_core::advisory::AggregateResult;
use ifa_core::client::AdvisoryApi;
use ifa_core::selector::SelectorMachine;
use ifa_core::sequence::RequestSequence;
use ifa_core::wire::RiskPoint;

/// Shared application state for the advisory dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Backend base URL (environment-specific, set by the app shell)
    pub api_base: Signal<String>,
    /// Autocomplete machine for the state selector
    pub state_selector: Signal<SelectorMachine>,
    /// Autocomplete machine for the river selector (scoped to the state)
    pub river_selector: Signal<SelectorMachine>,
    /// Committed state; single writer is the state selector
    pub selected_state: Signal<String>,
    /// Committed river; single writer is the river selector
    pub selected_river: Signal<String>,
    /// Whether an advisory submission is in flight
    pub submitting: Signal<bool>,
    /// Validation message for the query form, shown inline
    pub validation_msg: Signal<Option<String>>,
    /// Error from the submission path, rendered in the output panel
    pub error_msg: Signal<Option<String>>,
    /// Result of the most recent advisory submission
    pub result: Signal<Option<AggregateResult>>,
    /// Ticket counter enforcing last-submission-wins on submissions
    pub submit_seq: Signal<RequestSequence>,
    /// Risk points for the committed location (None until fetched)
    pub heatmap_points: Signal<Option<Vec<RiskPoint>>>,
    /// Whether the heatmap fetch is in flight
    pub heatmap_loading: Signal<bool>,
    /// Error message for the heatmap panel
    pub heatmap_error: Signal<Option<String>>,
    /// Ticket counter enforcing last-fetch-wins on heatmap loads
    pub heatmap_seq: Signal<RequestSequence>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            api_base: Signal::new("http://localhost:8000".to_string()),
            state_selector: Signal::new(SelectorMachine::new()),
            river_selector: Signal::new(SelectorMachine::new()),
            selected_state: Signal::new(String::new()),
            selected_river: Signal::new(String::new()),
            submitting: Signal::new(false),
            validation_msg: Signal::new(None),
            error_msg: Signal::new(None),
            result: Signal::new(None),
            submit_seq: Signal::new(RequestSequence::new()),
            heatmap_points: Signal::new(None),
            heatmap_loading: Signal::new(false),
            heatmap_error: Signal::new(None),
            heatmap_seq: Signal::new(RequestSequence::new()),
        }
    }

    /// Build an API client against the configured base URL.
    pub fn api(&self) -> AdvisoryApi {
        AdvisoryApi::new((self.api_base)())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
