//! Date slider driving the temporal selector.

use crate::sink::BrowserSink;
use crate::state::AppState;
use dioxus::prelude::*;

/// Range input over the active timeline, with the resolved date as label.
#[component]
pub fn TimeSlider() -> Element {
    let state = use_context::<AppState>();
    let (index, len, label) = match state.selector.read().as_ref() {
        Some(selector) => (
            selector.index(),
            selector.len(),
            selector.active_timestamp().to_string(),
        ),
        None => (0, 0, String::new()),
    };
    let max = len.saturating_sub(1);

    let on_input = move |evt: Event<FormData>| {
        let Ok(position) = evt.value().parse::<usize>() else {
            return;
        };
        let mut sink = BrowserSink::new(state);
        let mut selector = state.selector;
        if let Some(selector) = selector.write().as_mut() {
            if let Err(e) = selector.set_index(position, &mut sink) {
                log::warn!("[Etangs] slider: {}", e);
            }
        };
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            input {
                id: "timeSlider",
                r#type: "range",
                min: "0",
                max: "{max}",
                value: "{index}",
                disabled: len == 0,
                style: "width: 100%;",
                oninput: on_input,
            }
            div {
                id: "dateLabel",
                style: "font-weight: bold; color: #eee; text-align: center;",
                "{label}"
            }
        }
    }
}
