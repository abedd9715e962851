//! Map app configuration.

use etang_core::dryness::DrynessWindow;
use etang_core::palette::Palette;
use etang_data::legend::LegendSizing;
use serde::Serialize;

/// Static configuration of the pond map. `Default` carries the production values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapConfig {
    /// `[longitude, latitude]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub basemap_tiles: Vec<String>,
    pub basemap_attribution: String,
    pub raster_opacity: f64,
    /// URL of a year's dataset; `{year}` is replaced by the tab label.
    pub data_url_template: String,
    /// Year tabs, first one loaded at startup.
    pub years: Vec<String>,
    #[serde(skip)]
    pub palette: Palette,
    #[serde(skip)]
    pub legend: LegendSizing,
    #[serde(skip)]
    pub dryness_window: DrynessWindow,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [1.2100, 46.7561],
            zoom: 10.0,
            basemap_tiles: ["a", "b", "c"]
                .iter()
                .map(|sub| format!("https://{}.basemaps.cartocdn.com/dark_all/{{z}}/{{x}}/{{y}}{{r}}.png", sub))
                .collect(),
            basemap_attribution: "© OpenStreetMap contributors".to_string(),
            raster_opacity: 0.9,
            data_url_template: "data/etangs_mensuel_{year}.geojson".to_string(),
            years: vec!["2018".to_string(), "2019".to_string(), "2020".to_string()],
            palette: Palette::default(),
            legend: LegendSizing::default(),
            dryness_window: DrynessWindow::default(),
        }
    }
}

impl MapConfig {
    pub fn data_url(&self, year: &str) -> String {
        self.data_url_template.replace("{year}", year)
    }

    pub fn default_year(&self) -> String {
        self.years.first().cloned().unwrap_or_default()
    }
}
