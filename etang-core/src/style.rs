//! Declarative style rules and filter descriptors for the map renderer.
//!
//! Everything here is plain data (MapLibre style expressions as
//! `serde_json::Value`). The renderer evaluates the rules; nothing in this
//! crate filters or draws features itself.

use crate::dryness::DrynessWindow;
use crate::geojson::{CLASS_PROPERTY, DATE_PROPERTY, DRY_PROPERTY};
use crate::palette::{ColorTable, Palette, Rgb};
use crate::record::Timestamp;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::OnceLock;

/// Polygon fill layer colored by class.
pub const FILL_LAYER_ID: &str = "etangs";
/// Thin outline around every pond of the active date.
pub const OUTLINE_LAYER_ID: &str = "etangs-outline";
/// Thick outline around ponds that are dry inside the window.
pub const DRY_LAYER_ID: &str = "etangs-assec";

pub const OUTLINE_COLOR: Rgb = Rgb::new(0x44, 0x44, 0x44);
pub const OUTLINE_WIDTH: f64 = 1.0;
pub const DRY_COLOR: Rgb = Rgb::new(0xff, 0xd7, 0x00);
pub const DRY_WIDTH: f64 = 3.0;
pub const FILL_OPACITY: f64 = 0.9;

/// `["match", ["get", "bivar_class"], 1, c1, …, 9, c9, fallback]`
///
/// ```rust
/// use etang_core::palette::Palette;
/// use etang_core::style::fill_color_expression;
///
/// let expr = fill_color_expression(Palette::Etangs.table());
/// let parts = expr.as_array().unwrap();
/// assert_eq!(parts[0], "match");
/// assert_eq!(parts.len(), 2 + 9 * 2 + 1);
/// assert_eq!(parts.last().unwrap(), "#cccccc");
/// ```
pub fn fill_color_expression(table: &ColorTable) -> Value {
    let mut parts = vec![json!("match"), json!(["get", CLASS_PROPERTY])];
    for (code, color) in table.entries() {
        parts.push(json!(code.value()));
        parts.push(json!(color.to_hex()));
    }
    parts.push(json!(table.fallback().to_hex()));
    Value::Array(parts)
}

/// Fill expression of the default palette, built on first use.
pub fn bivariate_fill_expression() -> &'static Value {
    static EXPRESSION: OnceLock<Value> = OnceLock::new();
    EXPRESSION.get_or_init(|| fill_color_expression(Palette::default().table()))
}

/// Paint properties of the three pond layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerPaints {
    pub fill: Value,
    pub outline: Value,
    pub dry: Value,
}

impl LayerPaints {
    pub fn for_table(table: &ColorTable) -> Self {
        Self {
            fill: json!({
                "fill-color": fill_color_expression(table),
                "fill-opacity": FILL_OPACITY,
            }),
            outline: json!({
                "line-color": OUTLINE_COLOR.to_hex(),
                "line-width": OUTLINE_WIDTH,
                "line-opacity": 1,
            }),
            dry: json!({
                "line-color": DRY_COLOR.to_hex(),
                "line-width": DRY_WIDTH,
                "line-opacity": 1,
            }),
        }
    }
}

/// Feature visibility rule, serialized as a MapLibre filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Features of exactly this snapshot.
    DateEquals(Timestamp),
    /// Dry features of this snapshot, only if its month is in the window.
    DryInWindow { date: Timestamp, window: DrynessWindow },
    All(Vec<Filter>),
}

impl Filter {
    pub fn to_expression(&self) -> Value {
        match self {
            Filter::DateEquals(date) => json!(["==", ["get", DATE_PROPERTY], date.as_str()]),
            Filter::DryInWindow { date, window } => json!([
                "all",
                ["==", ["get", DATE_PROPERTY], date.as_str()],
                ["==", ["get", DRY_PROPERTY], true],
                window.contains(date),
            ]),
            Filter::All(filters) => {
                let mut parts = vec![json!("all")];
                parts.extend(filters.iter().map(Filter::to_expression));
                Value::Array(parts)
            }
        }
    }
}

impl Serialize for Filter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_expression().serialize(serializer)
    }
}

/// Filters for every pond layer at one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFilters {
    pub date: Filter,
    pub dryness: Filter,
}

impl MapFilters {
    pub fn for_timestamp(date: &Timestamp, window: DrynessWindow) -> Self {
        Self {
            date: Filter::DateEquals(date.clone()),
            dryness: Filter::DryInWindow {
                date: date.clone(),
                window,
            },
        }
    }

    /// `(layer id, filter expression)` for each pond layer.
    pub fn layer_filters(&self) -> [(&'static str, Value); 3] {
        [
            (FILL_LAYER_ID, self.date.to_expression()),
            (OUTLINE_LAYER_ID, self.date.to_expression()),
            (DRY_LAYER_ID, self.dryness.to_expression()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_expression_enumerates_codes_in_order() {
        let table = Palette::Etangs.table();
        let expr = fill_color_expression(table);
        let parts = expr.as_array().unwrap();
        assert_eq!(parts[1], json!(["get", "bivar_class"]));
        for (i, code) in (1..=9).enumerate() {
            assert_eq!(parts[2 + i * 2], json!(code));
            assert_eq!(parts[3 + i * 2], json!(table.color_of(code).to_hex()));
        }
        assert_eq!(parts[20], json!("#cccccc"));
    }

    #[test]
    fn test_default_expression_is_cached() {
        let first = bivariate_fill_expression();
        let second = bivariate_fill_expression();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, &fill_color_expression(Palette::Etangs.table()));
    }

    #[test]
    fn test_date_filter() {
        let filter = Filter::DateEquals(Timestamp::from("2018-05-01"));
        assert_eq!(filter.to_expression(), json!(["==", ["get", "date"], "2018-05-01"]));
    }

    #[test]
    fn test_dry_filter_outside_window_matches_nothing() {
        let filter = Filter::DryInWindow {
            date: Timestamp::from("2018-12-01"),
            window: DrynessWindow::default(),
        };
        let expr = filter.to_expression();
        assert_eq!(expr[0], "all");
        assert_eq!(expr[3], json!(false));

        let summer = Filter::DryInWindow {
            date: Timestamp::from("2018-07-01"),
            window: DrynessWindow::default(),
        };
        assert_eq!(summer.to_expression()[3], json!(true));
    }

    #[test]
    fn test_layer_filters_cover_every_layer() {
        let filters = MapFilters::for_timestamp(&Timestamp::from("2018-07-01"), DrynessWindow::default());
        let ids: Vec<&str> = filters.layer_filters().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![FILL_LAYER_ID, OUTLINE_LAYER_ID, DRY_LAYER_ID]);
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["date"], json!(["==", ["get", "date"], "2018-07-01"]));
    }

    #[test]
    fn test_layer_paints() {
        let paints = LayerPaints::for_table(Palette::Stevens.table());
        assert_eq!(paints.dry["line-color"], "#ffd700");
        assert_eq!(paints.outline["line-width"], json!(1.0));
        assert_eq!(paints.fill["fill-color"], fill_color_expression(Palette::Stevens.table()));
    }
}
