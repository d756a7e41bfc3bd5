//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The selection signal is the only value user interaction writes; the chart
//! series is re-derived from it on every change.

use azh_data::{Dataset, Selection};
use dioxus::prelude::*;

/// Shared application state for the housing dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Validated dataset (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected region
    pub selection: Signal<Selection>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selection: Signal::new(Selection::default()),
        }
    }

    /// Select a region by name. Shared by row clicks and the dropdown.
    pub fn select_region(&mut self, name: impl Into<String>) {
        self.selection.write().select(name);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
