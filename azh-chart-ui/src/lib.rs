//! Shared Dioxus components and chart rendering for the Arizona housing dashboard.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `chart`: Plotters SVG rendering and hover tooltips for the line chart
//! - `theme`: Chart and table colours
//! - `js_bridge`: Scroll helpers via `js_sys::eval()`
//! - `components`: Reusable RSX components (title bar, chart, table, selector, etc.)

pub mod chart;
pub mod components;
pub mod js_bridge;
pub mod state;
pub mod theme;
