//! Shared Dioxus components and Leaflet bridge for the advisory dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Leaflet map rendering via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, result display, heatmap)

pub mod components;
pub mod js_bridge;
pub mod state;
