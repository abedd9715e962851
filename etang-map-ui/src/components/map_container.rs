//! Container for the MapLibre map.

use super::MAP_CONTAINER_ID;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// Overlay shown on top of the map (e.g. the loading banner)
    pub children: Element,
}

/// Full-height map area. Stays mounted across dataset switches so the
/// MapLibre instance survives.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    rsx! {
        div {
            style: "position: relative; flex: 1; min-height: 480px;",
            div {
                id: MAP_CONTAINER_ID,
                style: "position: absolute; inset: 0;",
            }
            {props.children}
        }
    }
}
