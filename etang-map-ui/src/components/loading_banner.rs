use dioxus::prelude::*;

/// Banner laid over the map while a dataset is fetched.
#[component]
pub fn LoadingBanner() -> Element {
    rsx! {
        div {
            style: "position: absolute; top: 12px; left: 50%; transform: translateX(-50%); padding: 6px 14px; background: rgba(20, 20, 20, 0.85); color: #ddd; border-radius: 4px; z-index: 2;",
            "Loading ponds..."
        }
    }
}
