//! Autocomplete selector for the river, scoped to the committed state.

use crate::state::AppState;
use dioxus::prelude::*;

const DROPDOWN_STYLE: &str = "position: absolute; top: 100%; left: 0; right: 0; z-index: 10; \
    max-height: 220px; overflow-y: auto; background: #fff; border: 1px solid #ccc; \
    border-radius: 0 0 8px 8px;";
const ITEM_STYLE: &str = "padding: 8px 12px; cursor: pointer; border-bottom: 1px solid #f0f0f0;";
const NO_RESULTS_STYLE: &str = "padding: 8px 12px; color: #888; font-style: italic;";

/// Autocomplete river selector.
///
/// Re-fetches candidates whenever the bound scope (the committed state)
/// changes; candidates for the old scope are invalidated, never
/// accumulated. Without a scope the selector is disabled and never
/// fetches.
#[component]
pub fn RiverSelector() -> Element {
    let mut state = use_context::<AppState>();

    use_effect(move || {
        let scope = (state.selected_state)();
        if scope.is_empty() {
            state.river_selector.write().reset();
            return;
        }
        let ticket = {
            let mut machine = state.river_selector.write();
            machine.reset();
            machine.begin_fetch()
        };
        let api = state.api();
        spawn(async move {
            let candidates = api.rivers(&scope).await;
            // A stale ticket means the scope changed again mid-flight
            state.river_selector.write().finish_fetch(ticket, candidates);
        });
    });

    let machine = state.river_selector.read().clone();
    let search_term = machine.search_term().to_string();
    let scope = (state.selected_state)();
    let disabled = scope.is_empty() || machine.is_loading();
    let placeholder = if scope.is_empty() {
        "Select a state first"
    } else {
        "Search river..."
    };

    rsx! {
        div {
            style: "margin: 8px 0; position: relative;",
            label {
                r#for: "river-input",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "River/Estuary: "
            }
            input {
                id: "river-input",
                r#type: "text",
                style: "width: 100%; padding: 8px 12px; box-sizing: border-box;",
                value: "{search_term}",
                placeholder: placeholder,
                autocomplete: "off",
                disabled: disabled,
                oninput: move |evt: Event<FormData>| {
                    state.river_selector.write().set_term(&evt.value());
                },
                onfocus: move |_| {
                    state.river_selector.write().open_dropdown();
                },
            }
            if machine.is_loading() {
                span {
                    style: "color: #666; font-size: 12px;",
                    "Loading rivers for {scope}..."
                }
            }
            if machine.is_open() {
                div {
                    style: "position: fixed; inset: 0; z-index: 5;",
                    onclick: move |_| {
                        state.river_selector.write().dismiss();
                    },
                }
                div {
                    style: DROPDOWN_STYLE,
                    if machine.no_matches() {
                        div { style: NO_RESULTS_STYLE, "No rivers found" }
                    }
                    for candidate in machine.filtered().iter().cloned() {
                        div {
                            key: "{candidate}",
                            style: ITEM_STYLE,
                            onclick: {
                                let candidate = candidate.clone();
                                move |_| {
                                    state.river_selector.write().select(&candidate);
                                    state.selected_river.set(candidate.clone());
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
