//! Arizona Housing Construction by County
//!
//! Single-page dashboard: one line chart for the selected region and a
//! table of every region's net housing construction per fiscal year.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/housing.json` (or `AZH_DATASET`) into
//!    `OUT_DIR` and records whether that is the bundled sample.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount the JSON is parsed and validated into a `Dataset`.
//! 4. Row clicks and the dropdown write `AppState::selection`; the chart
//!    series is re-projected from the selection in a memo, and the table
//!    re-highlights and scrolls to the selected row.

use azh_chart_ui::components::{
    ChartHeader, ErrorDisplay, LineChart, LoadingSpinner, RegionSelector, RegionTable, TitleBar,
};
use azh_chart_ui::state::AppState;
use azh_data::{Dataset, Series, YearKey};
use azh_utils::fiscal::describe_fiscal_range;
use dioxus::prelude::*;

/// Region records as `[{ "Name", "Total", "<year>": n, ... }]`.
const HOUSING_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/housing.json"));

const LOGO: Asset = asset!("/assets/logo.svg");

const PAGE_TITLE: &str = "Arizona Housing Construction 2010-2025";

/// "1" when the embedded file is the bundled sample or the build placeholder.
const SAMPLE_DATA: &str = env!("AZH_SAMPLE_DATA");

const OFFICIAL_SOURCE: &str =
    "Arizona Office of Economic Opportunity (State Demographers Office) 2025";

const SAMPLE_SOURCE: &str =
    "Sample data with illustrative values, not an official release. Rebuild with AZH_DATASET pointing at the published export.";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// "2011" .. "2025" of the loaded dataset, for titles.
fn year_range(year_keys: &[YearKey]) -> (String, String) {
    let first = year_keys.first().map(ToString::to_string).unwrap_or_default();
    let last = year_keys.last().map(ToString::to_string).unwrap_or_default();
    (first, last)
}

/// Calendar span of the first through last fiscal year, empty if unknown.
fn fiscal_period(year_keys: &[YearKey]) -> String {
    let first = year_keys.first().and_then(YearKey::fiscal_year);
    let last = year_keys.last().and_then(YearKey::fiscal_year);
    first
        .zip(last)
        .and_then(|(first, last)| describe_fiscal_range(first, last))
        .unwrap_or_default()
}

/// Attribution line under the table.
fn source_credit(sample_data: bool) -> (&'static str, &'static str) {
    if sample_data {
        ("Sample data: ", SAMPLE_SOURCE)
    } else {
        ("Source: ", OFFICIAL_SOURCE)
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect: parse and validate the embedded dataset once on mount ───
    use_effect(move || {
        match Dataset::from_json(HOUSING_JSON) {
            Ok(dataset) => {
                state.dataset.set(Some(dataset));
            }
            Err(e) => {
                log::error!("Failed to load housing data: {}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
        state.loading.set(false);
    });

    // ─── Memo: re-project the chart series whenever the selection changes ───
    let series = use_memo(move || {
        let dataset = state.dataset.read();
        let selection = state.selection.read();
        dataset
            .as_ref()
            .map(|d| d.series_for(&selection).map_err(|e| e.to_string()))
    });

    let year_keys: Vec<YearKey> = state
        .dataset
        .read()
        .as_ref()
        .map(|d| d.year_keys().to_vec())
        .unwrap_or_default();

    rsx! {
        div {
            style: "height: 100vh; display: flex; flex-direction: column; background: #FFFFFF; font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;",

            TitleBar {
                title: PAGE_TITLE.to_string(),
                logo_src: LOGO.to_string(),
                logo_alt: "Arizona League Logo".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                main {
                    style: "flex: 1; min-height: 0; display: flex; flex-direction: column; gap: 24px; padding: 16px 32px; overflow: hidden;",
                    {match series() {
                        Some(Ok(series)) => rsx! {
                            ChartSection { series, year_keys: year_keys.clone() }
                        },
                        Some(Err(message)) => rsx! {
                            ErrorDisplay { message }
                        },
                        None => rsx! {},
                    }}
                    TableSection { year_keys: year_keys.clone() }
                }
            }
        }
    }
}

#[component]
fn ChartSection(series: Series, year_keys: Vec<YearKey>) -> Element {
    let (first, last) = year_range(&year_keys);
    let title = format!(
        "Housing Construction in {} FY{} - FY{}",
        series.label, first, last
    );
    let period = fiscal_period(&year_keys);

    rsx! {
        section {
            style: "flex: 0 0 50%; min-height: 0; display: flex; flex-direction: column; padding: 24px; border-radius: 8px; box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1);",
            ChartHeader { title, period }
            div {
                style: "flex: 1; min-height: 0; padding: 0 16px 16px 0;",
                LineChart { series, year_keys }
            }
        }
    }
}

#[component]
fn TableSection(year_keys: Vec<YearKey>) -> Element {
    let (first, last) = year_range(&year_keys);

    rsx! {
        section {
            style: "flex: 1; min-height: 0; display: flex; flex-direction: column; overflow: hidden; border: 1px solid #E5E7EB; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.05);",
            div {
                style: "padding: 16px; border-bottom: 1px solid #E5E7EB; display: flex; align-items: center; justify-content: space-between; gap: 16px; flex-wrap: wrap;",
                h2 {
                    style: "margin: 0; font-size: 14px; font-weight: 600; color: #111827;",
                    "Net Housing Construction ({first}-{last}) for Fiscal Year (July 1 - June 30)"
                }
                RegionSelector {}
            }
            RegionTable {}
            SourceNote {}
        }
    }
}

/// Data source attribution shown under the table.
#[component]
fn SourceNote() -> Element {
    let (heading, credit) = source_credit(SAMPLE_DATA == "1");

    rsx! {
        div {
            style: "padding: 16px; border-top: 1px solid #E5E7EB; background: #F9FAFB; font-size: 12px; color: #4B5563; font-style: italic;",
            p {
                style: "margin: 0 0 4px 0;",
                span { style: "font-weight: 600; font-style: normal;", "{heading}" }
                "{credit}"
            }
            p {
                style: "margin: 0;",
                span { style: "font-weight: 600; font-style: normal;", "Note: " }
                "Numbers rounded to the nearest ten"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_is_valid() {
        let dataset = Dataset::from_json(HOUSING_JSON).unwrap();
        assert_eq!(dataset.region_names()[0], azh_data::AGGREGATE_REGION);
    }

    #[test]
    fn test_fiscal_period() {
        let keys: Vec<YearKey> = ["2011", "2012", "2025"].into_iter().map(YearKey::from).collect();
        assert_eq!(fiscal_period(&keys), "July 1, 2010 - June 30, 2025");
        assert_eq!(fiscal_period(&[]), "");
    }

    #[test]
    fn test_source_credit_flags_sample_data() {
        let (heading, credit) = source_credit(true);
        assert_eq!(heading, "Sample data: ");
        assert!(credit.contains("not an official release"));
        assert!(!credit.contains("Office of Economic Opportunity"));

        assert_eq!(source_credit(false), ("Source: ", OFFICIAL_SOURCE));
    }

    #[test]
    fn test_bundled_fixture_is_marked_as_sample() {
        if option_env!("AZH_DATASET").is_none() {
            assert_eq!(SAMPLE_DATA, "1");
        }
    }

    #[test]
    fn test_year_range() {
        let keys: Vec<YearKey> = ["2011", "2012", "2025"].into_iter().map(YearKey::from).collect();
        assert_eq!(year_range(&keys), ("2011".to_string(), "2025".to_string()));
        assert_eq!(year_range(&[]), (String::new(), String::new()));
    }
}
