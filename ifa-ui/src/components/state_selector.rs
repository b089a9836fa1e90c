//! Autocomplete selector for the state scope.

use crate::state::AppState;
use dioxus::prelude::*;

const DROPDOWN_STYLE: &str = "position: absolute; top: 100%; left: 0; right: 0; z-index: 10; \
    max-height: 220px; overflow-y: auto; background: #fff; border: 1px solid #ccc; \
    border-radius: 0 0 8px 8px;";
const ITEM_STYLE: &str = "padding: 8px 12px; cursor: pointer; border-bottom: 1px solid #f0f0f0;";
const NO_RESULTS_STYLE: &str = "padding: 8px 12px; color: #888; font-style: italic;";

/// Autocomplete state selector.
///
/// Loads candidates once on mount (backend with embedded fallback),
/// filters them locally on every keystroke, and commits the chosen state
/// into `AppState::selected_state`. Committing a state invalidates any
/// previously chosen river.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();

    // Initial candidate load
    use_effect(move || {
        let ticket = state.state_selector.write().begin_fetch();
        let api = state.api();
        spawn(async move {
            let candidates = api.states().await;
            state.state_selector.write().finish_fetch(ticket, candidates);
        });
    });

    let machine = state.state_selector.read().clone();
    let search_term = machine.search_term().to_string();

    rsx! {
        div {
            style: "margin: 8px 0; position: relative;",
            label {
                r#for: "state-input",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "State/Region: "
            }
            input {
                id: "state-input",
                r#type: "text",
                style: "width: 100%; padding: 8px 12px; box-sizing: border-box;",
                value: "{search_term}",
                placeholder: "Search state...",
                autocomplete: "off",
                disabled: machine.is_loading(),
                oninput: move |evt: Event<FormData>| {
                    state.state_selector.write().set_term(&evt.value());
                },
                onfocus: move |_| {
                    state.state_selector.write().open_dropdown();
                },
            }
            if machine.is_loading() {
                span {
                    style: "color: #666; font-size: 12px;",
                    "Loading states..."
                }
            }
            if machine.is_open() {
                // Click-away layer: any interaction outside the dropdown
                // closes it without altering the committed value.
                div {
                    style: "position: fixed; inset: 0; z-index: 5;",
                    onclick: move |_| {
                        state.state_selector.write().dismiss();
                    },
                }
                div {
                    style: DROPDOWN_STYLE,
                    if machine.no_matches() {
                        div { style: NO_RESULTS_STYLE, "No states found" }
                    }
                    for candidate in machine.filtered().iter().cloned() {
                        div {
                            key: "{candidate}",
                            style: ITEM_STYLE,
                            onclick: {
                                let candidate = candidate.clone();
                                move |_| {
                                    state.state_selector.write().select(&candidate);
                                    state.selected_state.set(candidate.clone());
                                    // The old river belongs to the old scope
                                    state.selected_river.set(String::new());
                                }
                            },
                            "{candidate}"
                        }
                    }
                }
            }
        }
    }
}
