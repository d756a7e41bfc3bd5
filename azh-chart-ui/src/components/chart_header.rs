//! Chart title with the fiscal period it covers.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// e.g. "Housing Construction in Pima FY2011 - FY2025"
    pub title: String,
    /// Calendar span of the charted fiscal years, e.g. "July 1, 2010 - June 30, 2025".
    pub period: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        header {
            style: "margin-bottom: 12px; display: flex; align-items: baseline; justify-content: space-between; gap: 16px; flex-wrap: wrap;",
            h2 {
                style: "margin: 0; font-size: 16px; font-weight: 600; color: #111827;",
                "{props.title}"
            }
            span {
                style: "font-size: 12px; color: #6B7280; font-variant-numeric: tabular-nums;",
                "{props.period}"
            }
        }
    }
}
