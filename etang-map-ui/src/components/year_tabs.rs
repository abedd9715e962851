//! Year tabs; selecting one loads that year's dataset.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn YearTabs() -> Element {
    let mut state = use_context::<AppState>();
    let years = state.years.read().clone();
    let selected = (state.selected_year)();
    let loading = (state.loading)();

    rsx! {
        div {
            style: "display: flex; gap: 4px; margin: 8px 0;",
            for year in years.into_iter() {
                button {
                    key: "{year}",
                    disabled: loading,
                    style: tab_style(year == selected),
                    onclick: {
                        let year = year.clone();
                        move |_| state.selected_year.set(year.clone())
                    },
                    "{year}"
                }
            }
        }
    }
}

fn tab_style(active: bool) -> &'static str {
    if active {
        "padding: 4px 10px; border: 1px solid #2f6bff; background: #2f6bff; color: white; border-radius: 3px;"
    } else {
        "padding: 4px 10px; border: 1px solid #555; background: #222; color: #ccc; border-radius: 3px;"
    }
}
