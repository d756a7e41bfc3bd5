//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a load or data-integrity error in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 16px; background: #FEF2F2; color: #B91C1C; border-radius: 6px; border: 1px solid #FCA5A5; font-size: 14px;",
            strong { "Unable to display housing data: " }
            "{props.message}"
        }
    }
}
