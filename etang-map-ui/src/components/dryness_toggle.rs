//! Toggle for the dry-pond outline layer.

use crate::js_bridge;
use crate::state::AppState;
use etang_core::style::DRY_LAYER_ID;
use dioxus::prelude::*;

#[component]
pub fn DrynessToggle() -> Element {
    let mut state = use_context::<AppState>();
    let checked = (state.show_dryness)();

    let on_change = move |evt: Event<FormData>| {
        let visible = evt.checked();
        state.show_dryness.set(visible);
        js_bridge::set_layer_visibility(DRY_LAYER_ID, visible);
    };

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px; font-size: 12px; color: #ccc; margin: 8px 0;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: on_change,
            }
            span {
                style: "display: inline-block; width: 16px; height: 3px; background: #ffd700;",
            }
            "Dry ponds (March to October)"
        }
    }
}
