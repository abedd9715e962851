//! Container for the class-count bar chart.

use super::CHART_CONTAINER_ID;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Height in pixels (Chart.js fills the container)
    #[props(default = 220)]
    pub height: u32,
}

/// A fixed-height div Chart.js renders into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        div {
            id: CHART_CONTAINER_ID,
            style: "{style}",
        }
    }
}
