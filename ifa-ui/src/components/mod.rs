//! Reusable Dioxus RSX components for the advisory dashboard.

mod error_display;
mod heatmap_view;
mod loading_spinner;
mod result_display;
mod river_selector;
mod state_selector;

pub use error_display::ErrorDisplay;
pub use heatmap_view::HeatmapView;
pub use loading_spinner::LoadingSpinner;
pub use result_display::ResultDisplay;
pub use river_selector::RiverSelector;
pub use state_selector::StateSelector;
