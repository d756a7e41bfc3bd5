//! Static title bar with logo and dashboard title.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TitleBarProps {
    pub title: String,
    /// Logo image URL
    pub logo_src: String,
    #[props(default = "Logo".to_string())]
    pub logo_alt: String,
}

#[component]
pub fn TitleBar(props: TitleBarProps) -> Element {
    rsx! {
        header {
            style: "background: #FFFFFF; box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1); border-bottom: 1px solid #D1D5DB;",
            div {
                style: "display: flex; align-items: center; gap: 12px; padding: 12px 24px;",
                img {
                    src: "{props.logo_src}",
                    alt: "{props.logo_alt}",
                    style: "height: 40px; width: auto; flex-shrink: 0;",
                }
                div {
                    style: "height: 24px; width: 1px; background: #4B5563; flex-shrink: 0;",
                }
                h1 {
                    style: "margin: 0; font-size: 16px; font-weight: 700; color: #374151; line-height: 1.25;",
                    "{props.title}"
                }
            }
        }
    }
}
