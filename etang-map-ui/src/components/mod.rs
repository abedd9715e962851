//! Reusable Dioxus RSX components for the pond map.

mod chart_container;
mod dryness_toggle;
mod error_display;
mod legend_grid;
mod loading_banner;
mod map_container;
mod panel_header;
mod time_slider;
mod year_tabs;

pub use chart_container::ChartContainer;
pub use dryness_toggle::DrynessToggle;
pub use error_display::ErrorDisplay;
pub use legend_grid::LegendGrid;
pub use loading_banner::LoadingBanner;
pub use map_container::MapContainer;
pub use panel_header::PanelHeader;
pub use time_slider::TimeSlider;
pub use year_tabs::YearTabs;

/// DOM id of the MapLibre container.
pub const MAP_CONTAINER_ID: &str = "etangs-map";
/// DOM id of the class-count chart container.
pub const CHART_CONTAINER_ID: &str = "etangs-class-chart";
