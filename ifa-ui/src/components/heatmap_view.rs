//! Juvenile risk heatmap panel.
//!
//! Fetches risk points for the committed location independently of the
//! advisory submission, normalizes them through `ifa-data`, and renders
//! via the Leaflet bridge.

use crate::components::{ErrorDisplay, LoadingSpinner};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use ifa_core::location::LocationSelection;
use ifa_data::heatmap;
use log::warn;

/// DOM id for the Leaflet map container div.
const MAP_CONTAINER_ID: &str = "risk-map";

const OVERLAY_STYLE: &str = "position: absolute; inset: 0; z-index: 400; display: flex; \
    align-items: center; justify-content: center; background: rgba(255,255,255,0.7); \
    color: #555; text-align: center; padding: 16px;";

#[component]
pub fn HeatmapView() -> Element {
    let mut state = use_context::<AppState>();

    // ─── Effect 1: Fetch points whenever the committed location changes ───
    use_effect(move || {
        let scope = (state.selected_state)();
        let river = (state.selected_river)();
        if scope.is_empty() || river.is_empty() {
            state.heatmap_points.set(None);
            state.heatmap_error.set(None);
            return;
        }

        let ticket = state.heatmap_seq.read().begin();
        state.heatmap_loading.set(true);
        state.heatmap_error.set(None);
        let api = state.api();
        spawn(async move {
            let outcome = api.heatmap(&LocationSelection::new(scope, river)).await;
            // The location changed again mid-flight: discard silently
            if !state.heatmap_seq.read().is_current(ticket) {
                return;
            }
            match outcome {
                Ok(points) => {
                    state.heatmap_points.set(Some(points));
                }
                Err(e) => {
                    warn!("heatmap fetch failed: {e}");
                    state.heatmap_error.set(Some(e.to_string()));
                    state.heatmap_points.set(None);
                }
            }
            state.heatmap_loading.set(false);
        });
    });

    // ─── Effect 2: Re-render the map whenever the points change ───
    use_effect(move || {
        let loading = (state.heatmap_loading)();
        let has_error = state.heatmap_error.read().is_some();
        let points = state.heatmap_points.read().clone();

        if loading || has_error {
            return;
        }
        let Some(points) = points else {
            js_bridge::destroy_risk_map(MAP_CONTAINER_ID);
            return;
        };

        let map = heatmap::normalize(&points);
        let data_json = serde_json::to_string(&map).unwrap_or_default();
        let config_json = serde_json::json!({
            "tileUrl": "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            "attribution": "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a>",
        })
        .to_string();
        js_bridge::render_risk_map(MAP_CONTAINER_ID, &data_json, &config_json);
    });

    // ─── Render ───
    let scope = (state.selected_state)();
    let river = (state.selected_river)();
    let has_location = !scope.is_empty() && !river.is_empty();
    let loading = (state.heatmap_loading)();
    let error = state.heatmap_error.read().clone();
    let no_points = state
        .heatmap_points
        .read()
        .as_ref()
        .map(|p| p.is_empty())
        .unwrap_or(false);

    let river_label = if river.is_empty() {
        "selected river".to_string()
    } else {
        river.clone()
    };
    let state_label = if scope.is_empty() {
        "selected state".to_string()
    } else {
        scope.clone()
    };

    rsx! {
        div {
            div {
                style: "margin-bottom: 8px;",
                h3 { style: "margin: 0 0 4px 0;", "Juvenile Risk Heatmap" }
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Visual density map for {river_label} in {state_label}"
                }
            }

            if !has_location {
                div {
                    style: "padding: 40px; text-align: center; color: #888;",
                    p { "Select a state and river to view the spatial risk heatmap." }
                }
            } else if loading {
                LoadingSpinner { message: "Loading heatmap...".to_string() }
            } else if error.is_some() {
                ErrorDisplay { message: error.unwrap_or_default() }
            } else {
                div {
                    style: "position: relative;",
                    div {
                        id: MAP_CONTAINER_ID,
                        style: "height: 340px; width: 100%; border-radius: 16px; overflow: hidden;",
                    }
                    if no_points {
                        div {
                            style: OVERLAY_STYLE,
                            p { "No spatial records found for this combination. Try another river or state." }
                        }
                    }
                }
            }
        }
    }
}
