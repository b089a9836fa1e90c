//! Fish advisory dashboard.
//!
//! Query panel (cascading state/river selectors), advisory output panel
//! and an independent juvenile-risk heatmap panel, gated behind the
//! shell's session flag.
//!
//! Data flow:
//! 1. On mount: the state selector loads candidates (backend, falling back
//!    to the embedded table) and the Leaflet bridge is initialized.
//! 2. Committing a state clears the river and re-scopes the river selector.
//! 3. Submit validates the committed pair, posts the advisory query and
//!    projects the response; only the latest submission may update the
//!    result.
//! 4. The heatmap panel fetches and normalizes risk points for the same
//!    pair on its own lifecycle.

use dioxus::prelude::*;
use ifa_core::location::LocationSelection;
use ifa_core::session::{check_session, SessionCheck, SessionGate};
use ifa_ui::components::{ErrorDisplay, HeatmapView, ResultDisplay, RiverSelector, StateSelector};
use ifa_ui::js_bridge;
use ifa_ui::state::AppState;
use log::warn;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("advisory-root"))
        .launch(App);
}

/// Session gate backed by a Dioxus signal so gate changes re-render.
#[derive(Clone, Copy)]
struct SignalSession(Signal<bool>);

impl SessionGate for SignalSession {
    fn is_active(&self) -> bool {
        (self.0)()
    }

    fn clear(&self) {
        let mut flag = self.0;
        flag.set(false);
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let session_flag = use_signal(|| false);
    let session = SignalSession(session_flag);

    // One-time Leaflet bridge initialization
    use_effect(move || {
        js_bridge::init_maps();
    });

    // The core only gates on the opaque session signal; what "sign in"
    // means is the shell's business.
    if check_session(&session) == SessionCheck::AuthRequired {
        return rsx! {
            SignInPrompt { session_flag }
        };
    }

    let on_submit = move |_| {
        let selection =
            LocationSelection::new((state.selected_state)(), (state.selected_river)());
        if let Err(e) = selection.validate() {
            state.validation_msg.set(Some(e.to_string()));
            return;
        }
        state.validation_msg.set(None);
        state.error_msg.set(None);
        state.result.set(None);
        state.submitting.set(true);

        let ticket = state.submit_seq.read().begin();
        let api = state.api();
        spawn(async move {
            let outcome = api.submit(&selection).await;
            // A newer submission started while this one was in flight:
            // its result is authoritative, discard this one silently.
            if !state.submit_seq.read().is_current(ticket) {
                return;
            }
            match outcome {
                Ok(result) => {
                    state.result.set(Some(result));
                }
                Err(e) => {
                    warn!("advisory submission failed: {e}");
                    state.error_msg.set(Some(e.to_string()));
                }
            }
            state.submitting.set(false);
        });
    };

    let on_logout = move |_| {
        session.clear();
    };

    let submitting = (state.submitting)();
    let submit_label = if submitting { "Analyzing..." } else { "Get Advisory" };

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                h1 { style: "margin: 0;", "Fish Advisory Dashboard" }
                button {
                    style: "padding: 8px 16px;",
                    onclick: on_logout,
                    "Logout"
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; align-items: start;",

                div {
                    style: "border: 1px solid #e0e0e0; border-radius: 8px; padding: 16px;",
                    h2 { style: "margin-top: 0;", "Query Parameters" }

                    if let Some(msg) = state.validation_msg.read().as_ref() {
                        ErrorDisplay { message: msg.clone() }
                    }

                    StateSelector {}
                    RiverSelector {}

                    button {
                        style: "margin-top: 12px; padding: 10px 24px; font-weight: bold;",
                        disabled: submitting,
                        onclick: on_submit,
                        "{submit_label}"
                    }
                }

                div {
                    style: "border: 1px solid #e0e0e0; border-radius: 8px; padding: 16px;",
                    h2 { style: "margin-top: 0;", "Advisory Output" }
                    ResultDisplay {
                        result: state.result.read().clone(),
                        loading: submitting,
                        error: state.error_msg.read().clone(),
                    }
                }
            }

            div {
                style: "border: 1px solid #e0e0e0; border-radius: 8px; padding: 16px; margin-top: 16px;",
                HeatmapView {}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SignInPromptProps {
    session_flag: Signal<bool>,
}

/// Stand-in sign-in view rendered when the session gate rejects.
#[component]
fn SignInPrompt(props: SignInPromptProps) -> Element {
    let mut session_flag = props.session_flag;

    rsx! {
        div {
            style: "max-width: 400px; margin: 80px auto; text-align: center; font-family: system-ui, sans-serif;",
            h2 { "Sign in required" }
            p {
                style: "color: #666;",
                "An active session is required to query advisories."
            }
            button {
                style: "padding: 10px 24px; font-weight: bold;",
                onclick: move |_| session_flag.set(true),
                "Sign in"
            }
        }
    }
}
