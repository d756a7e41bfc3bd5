//! Reusable Dioxus RSX components for the housing dashboard.

mod chart_header;
mod error_display;
mod line_chart;
mod loading_spinner;
mod region_selector;
mod region_table;
mod title_bar;

pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use line_chart::LineChart;
pub use loading_spinner::LoadingSpinner;
pub use region_selector::RegionSelector;
pub use region_table::{RegionTable, TABLE_SCROLL_ID};
pub use title_bar::TitleBar;
