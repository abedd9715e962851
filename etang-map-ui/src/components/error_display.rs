//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Visible error state for failed dataset loads.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 8px 0; background: #3b1f1f; color: #ffb4a9; border-radius: 4px; border: 1px solid #8c3b32;",
            strong { "Dataset unavailable: " }
            "{props.message}"
        }
    }
}
