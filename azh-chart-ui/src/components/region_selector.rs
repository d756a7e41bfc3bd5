//! Dropdown selector for choosing a region.

use crate::state::AppState;
use dioxus::prelude::*;

/// Region dropdown selector.
/// Lists the aggregate region followed by every county, and writes the
/// choice into the shared selection.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let names: Vec<String> = state
        .dataset
        .read()
        .as_ref()
        .map(|d| d.region_names().into_iter().map(str::to_string).collect())
        .unwrap_or_default();
    let selected = state.selection.read().current().to_string();

    let on_change = move |evt: Event<FormData>| {
        state.select_region(evt.value());
    };

    rsx! {
        select {
            id: "region-select",
            aria_label: "Region",
            style: "width: 256px; flex-shrink: 0; padding: 6px 16px; font-size: 14px; color: #374151; background: #FFFFFF; border: 2px solid #D1D5DB; border-radius: 8px; cursor: pointer;",
            onchange: on_change,
            for name in names.iter() {
                option {
                    key: "{name}",
                    value: "{name}",
                    selected: *name == selected,
                    "{name}"
                }
            }
        }
    }
}
