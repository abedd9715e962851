//! Side panel section header.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn PanelHeader(props: PanelHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 12px 0 6px 0;",
            h3 {
                style: "margin: 0 0 2px 0; font-size: 14px; color: #eee;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 11px; color: #999;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
