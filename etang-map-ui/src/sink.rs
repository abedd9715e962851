//! Browser side of the view boundary: map filters and the chart go through the
//! JS bridge, the legend goes into a signal rendered by [`LegendGrid`].
//!
//! [`LegendGrid`]: crate::components::LegendGrid

use crate::components::CHART_CONTAINER_ID;
use crate::js_bridge;
use crate::state::AppState;
use etang_core::palette::ColorTable;
use etang_core::record::Timestamp;
use etang_core::style::MapFilters;
use etang_data::chart::ClassBar;
use etang_data::legend::LegendLayout;
use etang_data::series::{Dynamics, PondSeries};
use etang_data::session::ViewSink;
use dioxus::prelude::*;
use serde::Serialize;

pub struct BrowserSink {
    legend: Signal<Option<LegendLayout>>,
}

impl BrowserSink {
    pub fn new(state: AppState) -> Self {
        Self {
            legend: state.legend,
        }
    }
}

impl ViewSink for BrowserSink {
    fn apply_filters(&mut self, filters: &MapFilters) {
        js_bridge::apply_filters(filters);
    }

    fn render_legend(&mut self, legend: &LegendLayout) {
        self.legend.set(Some(legend.clone()));
    }

    fn render_chart(&mut self, timestamp: &Timestamp, bars: &[ClassBar]) {
        let bars_json = serde_json::to_string(bars).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": format!("Ponds per class on {}", timestamp),
            "yAxisLabel": "Ponds",
        }))
        .unwrap_or_default();
        js_bridge::render_class_chart(CHART_CONTAINER_ID, &bars_json, &config_json);
    }
}

/// One line of the pond popup table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupRow {
    pub date: String,
    pub class_code: Option<u8>,
    pub color: String,
    pub dry: bool,
    pub ndvi: Option<f64>,
    pub water_frequency: Option<f64>,
}

/// Payload of `etangMap.showPopup`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PondPopup {
    pub pond_id: String,
    pub dynamics: Option<Dynamics>,
    pub rows: Vec<PopupRow>,
}

impl PondPopup {
    pub fn new(series: &PondSeries, colors: &ColorTable) -> Self {
        Self {
            pond_id: series.pond_id.to_string(),
            dynamics: series.dynamics(),
            rows: series
                .points
                .iter()
                .map(|point| PopupRow {
                    date: point.date.to_string(),
                    class_code: point.class_code.map(|c| c.value()),
                    color: point
                        .class_code
                        .map(|c| colors.color_of_code(c))
                        .unwrap_or(colors.fallback())
                        .to_hex(),
                    dry: point.dry,
                    ndvi: point.ndvi,
                    water_frequency: point.water_frequency,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etang_core::palette::Palette;
    use etang_core::record::{PondId, Record};
    use etang_data::series::PondIndex;

    #[test]
    fn test_popup_rows_use_fallback_for_unclassified() {
        let records = vec![
            Record::new("2018-04-01", "9", Some(3)),
            Record::new("2018-05-01", "9", None).with_dry(true),
        ];
        let index = PondIndex::build(&records);
        let series = index.get(&PondId::from("9")).unwrap();
        let popup = PondPopup::new(series, Palette::Etangs.table());

        assert_eq!(popup.pond_id, "9");
        assert_eq!(popup.rows.len(), 2);
        assert_eq!(popup.rows[0].color, "#2f6bff");
        assert_eq!(popup.rows[1].color, "#cccccc");
        assert!(popup.rows[1].dry);
        assert_eq!(popup.dynamics, Some(Dynamics::Stable));
    }
}
