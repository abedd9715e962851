//! 3×3 bivariate legend.

use crate::state::AppState;
use etang_data::legend::LegendLayout;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LegendCellsProps {
    pub layout: LegendLayout,
}

/// Legend of the active date, read from `AppState::legend`.
///
/// Rendering from the last emitted layout replaces the previous grid entirely.
#[component]
pub fn LegendGrid() -> Element {
    let state = use_context::<AppState>();
    let layout = state.legend.read().clone();

    rsx! {
        div {
            style: "display: flex; align-items: stretch; gap: 6px;",
            div {
                style: "writing-mode: vertical-rl; transform: rotate(180deg); font-size: 11px; color: #aaa; text-align: center;",
                "Water frequency →"
            }
            div {
                if let Some(layout) = layout {
                    LegendCells { layout }
                } else {
                    div { style: "color: #777; font-size: 12px;", "No data" }
                }
                div {
                    style: "font-size: 11px; color: #aaa; text-align: center; margin-top: 4px;",
                    "Vegetation (NDVI) →"
                }
            }
        }
    }
}

/// The grid itself: one fixed slot per class, with a square sized by count.
#[component]
fn LegendCells(props: LegendCellsProps) -> Element {
    rsx! {
        div {
            class: "legend-grid",
            style: "display: grid; grid-template-columns: repeat(3, 44px); grid-auto-rows: 44px; gap: 2px;",
            for cell in props.layout.cells.iter() {
                div {
                    key: "{cell.code}",
                    style: "display: flex; align-items: center; justify-content: center;",
                    title: cell_title(cell.code.value(), cell.count),
                    div {
                        style: "width: {cell.size_px}px; height: {cell.size_px}px; background-color: {cell.color};",
                    }
                }
            }
        }
    }
}

fn cell_title(code: u8, count: Option<u32>) -> String {
    match count {
        Some(count) => format!("Class {}: {} ponds", code, count),
        None => format!("Class {}", code),
    }
}
