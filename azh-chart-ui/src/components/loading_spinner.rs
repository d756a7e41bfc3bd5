use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default = "Loading housing data...".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #6B7280;",
            "{label}"
        }
    }
}
