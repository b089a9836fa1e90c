//! Advisory result panel with discriminated render states.

use crate::components::LoadingSpinner;
use dioxus::prelude::*;
use ifa_core::advisory::{AggregateResult, SpeciesAdvisory};
use ifa_core::zone::Zone;

#[derive(Props, Clone, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<AggregateResult>,
    pub loading: bool,
    pub error: Option<String>,
}

fn zone_color(zone: Zone) -> &'static str {
    match zone {
        Zone::Red => "#ef4444",
        Zone::Yellow => "#facc15",
        Zone::Green => "#4ade80",
        Zone::Unknown => "#9ca3af",
    }
}

/// Renders one of four states: idle-empty, loading, error, or the
/// aggregate result. Zero species is a displayable empty state.
#[component]
pub fn ResultDisplay(props: ResultDisplayProps) -> Element {
    if props.loading {
        return rsx! {
            LoadingSpinner { message: "Analyzing...".to_string() }
        };
    }

    if let Some(message) = props.error {
        return rsx! {
            div {
                style: "padding: 16px; background: #FFEBEE; color: #C62828; border-radius: 8px;",
                h3 { style: "margin: 0 0 8px 0;", "Error" }
                p { style: "margin: 0;", "{message}" }
            }
        };
    }

    let Some(result) = props.result else {
        return rsx! {
            div {
                style: "padding: 40px; text-align: center; color: #888;",
                p { "Submit your analysis to see results" }
            }
        };
    };

    let overall_color = zone_color(result.overall_zone);

    rsx! {
        div {
            div {
                style: "display: flex; align-items: center; gap: 12px; margin-bottom: 12px;",
                h3 { style: "margin: 0;", "{result.river_name}" }
                span {
                    style: "padding: 4px 12px; border-radius: 12px; color: #fff; font-weight: bold; background: {overall_color};",
                    "Overall: {result.overall_zone}"
                }
            }
            if result.species.is_empty() {
                p {
                    style: "color: #888;",
                    "No species records found for this location."
                }
            }
            for advisory in result.species.iter().cloned() {
                SpeciesCard { advisory }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SpeciesCardProps {
    advisory: SpeciesAdvisory,
}

/// One card per species record.
#[component]
fn SpeciesCard(props: SpeciesCardProps) -> Element {
    let advisory = props.advisory;
    let badge_color = zone_color(advisory.zone);

    rsx! {
        div {
            style: "border: 1px solid #e0e0e0; border-radius: 8px; padding: 12px 16px; margin-bottom: 8px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                strong { "{advisory.name}" }
                span {
                    style: "padding: 2px 10px; border-radius: 10px; color: #fff; font-size: 12px; background: {badge_color};",
                    "{advisory.zone}"
                }
            }
            p {
                style: "margin: 4px 0; color: #666; font-style: italic; font-size: 13px;",
                "{advisory.scientific_name}"
            }
            if !advisory.risk_factors.is_empty() {
                ul {
                    style: "margin: 4px 0; padding-left: 20px; font-size: 13px;",
                    for factor in advisory.risk_factors.iter() {
                        li { key: "{factor}", "{factor}" }
                    }
                }
            }
            p {
                style: "margin: 4px 0; font-size: 13px;",
                strong { "Advisory: " }
                "{advisory.fishing_advisory}"
            }
            p {
                style: "margin: 4px 0; font-size: 13px;",
                strong { "Recommended gear: " }
                "{advisory.recommended_gear}"
            }
            p {
                style: "margin: 4px 0; font-size: 13px; color: #666;",
                strong { "Economic note: " }
                "{advisory.economic_note}"
            }
        }
    }
}
