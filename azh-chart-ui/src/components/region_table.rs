//! Region table: one row per region, one column per fiscal year, plus Total.
//!
//! The name column and the Total column are sticky so both stay visible while
//! the year columns scroll horizontally. Clicking a row selects that region;
//! whenever the selection changes the matching row is scrolled into view.

use crate::js_bridge::{self, row_dom_id};
use crate::state::AppState;
use crate::theme::{HEADER_BG, ROW_BG, SELECTED_ROW_BG};
use azh_utils::fiscal::describe_fiscal_year;
use azh_utils::format::format_count;
use dioxus::prelude::*;

/// DOM id of the scrollable table container.
pub const TABLE_SCROLL_ID: &str = "region-table-scroll";

const TH_STYLE: &str = "padding: 10px 16px; text-align: right; font-size: 12px; font-weight: 600; color: #374151; text-transform: uppercase; letter-spacing: 0.05em; white-space: nowrap;";
const TD_STYLE: &str = "padding: 8px 16px; text-align: right; font-size: 12px; color: #4B5563; white-space: nowrap; font-variant-numeric: tabular-nums; border-top: 1px solid #E5E7EB;";

/// A table row, precomputed so the RSX below only interpolates strings.
#[derive(Clone, PartialEq)]
struct RowView {
    name: String,
    dom_id: String,
    cells: Vec<String>,
    total: String,
    selected: bool,
}

#[component]
pub fn RegionTable() -> Element {
    let state = use_context::<AppState>();

    // Reveal the Total column once the table is mounted.
    use_effect(move || {
        js_bridge::scroll_to_right_edge(TABLE_SCROLL_ID);
    });

    // Keep the selected row visible whenever the selection changes.
    use_effect(move || {
        let selected = state.selection.read().current().to_string();
        if js_bridge::element_exists(TABLE_SCROLL_ID) {
            js_bridge::scroll_row_into_view(&row_dom_id(&selected));
        }
    });

    let dataset_guard = state.dataset.read();
    let Some(dataset) = dataset_guard.as_ref() else {
        return rsx! {};
    };
    let selection = state.selection.read();

    let headers: Vec<(String, String)> = dataset
        .year_keys()
        .iter()
        .map(|year| {
            let tooltip = year
                .fiscal_year()
                .and_then(describe_fiscal_year)
                .unwrap_or_default();
            (year.to_string(), tooltip)
        })
        .collect();

    let rows: Vec<RowView> = dataset
        .display_order()
        .into_iter()
        .map(|record| RowView {
            name: record.name().to_string(),
            dom_id: row_dom_id(record.name()),
            cells: dataset
                .year_keys()
                .iter()
                .map(|year| record.value(year.as_str()).map(format_count).unwrap_or_default())
                .collect(),
            total: format_count(record.total()),
            selected: selection.is_selected(record.name()),
        })
        .collect();

    rsx! {
        div {
            id: TABLE_SCROLL_ID,
            style: "flex: 1; min-height: 0; overflow: auto;",
            table {
                style: "min-width: 100%; border-collapse: separate; border-spacing: 0;",
                thead {
                    tr {
                        th {
                            style: "position: sticky; top: 0; left: 0; z-index: 40; background: {HEADER_BG}; {TH_STYLE} text-align: left; padding-left: 24px;",
                            "County"
                        }
                        for (year, tooltip) in headers.iter() {
                            th {
                                key: "{year}",
                                title: "{tooltip}",
                                style: "position: sticky; top: 0; z-index: 30; background: {HEADER_BG}; {TH_STYLE}",
                                "{year}"
                            }
                        }
                        th {
                            style: "position: sticky; top: 0; right: 0; z-index: 40; background: {HEADER_BG}; {TH_STYLE} padding-right: 24px;",
                            "Total"
                        }
                    }
                }
                tbody {
                    for row in rows.into_iter() {
                        {
                            let mut state = state;
                            let name = row.name.clone();
                            let bg = if row.selected { SELECTED_ROW_BG } else { ROW_BG };
                            rsx! {
                                tr {
                                    key: "{row.name}",
                                    id: "{row.dom_id}",
                                    style: "cursor: pointer; background: {bg};",
                                    onclick: move |_| state.select_region(name.clone()),
                                    td {
                                        style: "position: sticky; left: 0; z-index: 20; background: {bg}; {TD_STYLE} text-align: left; padding-left: 24px; font-weight: 500; color: #111827;",
                                        "{row.name}"
                                    }
                                    for (i, cell) in row.cells.iter().enumerate() {
                                        td {
                                            key: "{i}",
                                            style: "{TD_STYLE}",
                                            "{cell}"
                                        }
                                    }
                                    td {
                                        style: "position: sticky; right: 0; z-index: 20; background: {bg}; {TD_STYLE} padding-right: 24px; font-weight: 600; color: #111827;",
                                        "{row.total}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
