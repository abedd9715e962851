//! GeoJSON load boundary.
//!
//! A dataset is one FeatureCollection per year, one feature per pond and
//! snapshot. Properties are loosely typed in the files (GeoPandas writes class
//! codes as floats as soon as a NaN is present, ids may be numbers or strings),
//! so they are coerced once here into [`Record`]s. Geometry is left to the
//! map renderer and is not read.
//!
//! # Properties
//!
//! - `date` (required): snapshot timestamp, `YYYY-MM-DD`
//! - `pond_id` (required, falls back to `id`): pond identifier
//! - `bivar_class`: class code 1..=9, may be null
//! - `assec`: dryness flag, missing means not dry
//! - `ndvi`, `freq_eau`: optional secondary metrics

use crate::error::{EtangError, Result};
use crate::record::{PondId, Record, Timestamp};
use flate2::read::GzDecoder;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;

pub const DATE_PROPERTY: &str = "date";
pub const CLASS_PROPERTY: &str = "bivar_class";
pub const POND_ID_PROPERTY: &str = "pond_id";
pub const DRY_PROPERTY: &str = "assec";
pub const NDVI_PROPERTY: &str = "ndvi";
pub const WATER_FREQUENCY_PROPERTY: &str = "freq_eau";

const FALLBACK_ID_PROPERTY: &str = "id";

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

/// Records of one dataset (one year), validated at load time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Features dropped for lack of a date or pond id.
    pub skipped: usize,
}

impl Dataset {
    /// Parse a GeoJSON FeatureCollection.
    ///
    /// ```rust
    /// use etang_core::geojson::Dataset;
    ///
    /// let geojson = r#"{"type": "FeatureCollection", "features": [
    ///     {"type": "Feature", "geometry": null,
    ///      "properties": {"date": "2018-04-01", "pond_id": 12, "bivar_class": 5.0, "assec": false}}
    /// ]}"#;
    /// let dataset = Dataset::from_geojson_str(geojson).unwrap();
    /// assert_eq!(dataset.records.len(), 1);
    /// assert_eq!(dataset.records[0].pond_id.as_str(), "12");
    /// ```
    pub fn from_geojson_str(geojson: &str) -> Result<Self> {
        let collection: FeatureCollection = serde_json::from_str(geojson)?;
        Self::from_collection(collection)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let collection: FeatureCollection = serde_json::from_reader(reader)?;
        Self::from_collection(collection)
    }

    /// Parse a gzip-compressed GeoJSON stream (`.geojson.gz`).
    pub fn from_gzip_reader<R: Read>(reader: R) -> Result<Self> {
        let mut text = String::new();
        GzDecoder::new(reader).read_to_string(&mut text)?;
        Self::from_geojson_str(&text)
    }

    fn from_collection(collection: FeatureCollection) -> Result<Self> {
        if collection.kind != "FeatureCollection" {
            return Err(EtangError::NotFeatureCollection(collection.kind));
        }

        let mut records = Vec::with_capacity(collection.features.len());
        let mut skipped = 0usize;
        for (position, feature) in collection.features.into_iter().enumerate() {
            let properties = feature.properties.unwrap_or_default();
            match record_from_properties(&properties) {
                Some(record) => records.push(record),
                None => {
                    log::warn!(
                        "[Etangs] loader: skipping feature #{} without {} or {}",
                        position,
                        DATE_PROPERTY,
                        POND_ID_PROPERTY
                    );
                    skipped += 1;
                }
            }
        }
        log::info!(
            "[Etangs] loader: Loaded {} records, skipped {} features",
            records.len(),
            skipped
        );
        Ok(Self { records, skipped })
    }
}

fn record_from_properties(properties: &Map<String, Value>) -> Option<Record> {
    // Kept byte for byte: the map filters compare against the raw property.
    let date = properties
        .get(DATE_PROPERTY)
        .and_then(Value::as_str)
        .filter(|d| !d.trim().is_empty())?;
    let pond_id = properties
        .get(POND_ID_PROPERTY)
        .or_else(|| properties.get(FALLBACK_ID_PROPERTY))
        .and_then(coerce_id)?;

    Some(Record {
        date: Timestamp::new(date),
        class_value: properties.get(CLASS_PROPERTY).and_then(coerce_integer),
        pond_id,
        dry: properties.get(DRY_PROPERTY).map(coerce_bool).unwrap_or(false),
        ndvi: properties.get(NDVI_PROPERTY).and_then(coerce_float),
        water_frequency: properties.get(WATER_FREQUENCY_PROPERTY).and_then(coerce_float),
    })
}

fn coerce_id(value: &Value) -> Option<PondId> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(PondId::new(s.as_str())),
        Value::Number(_) => coerce_integer(value)
            .map(|n| PondId::new(n.to_string()))
            .or_else(|| Some(PondId::new(value.to_string()))),
        _ => None,
    }
}

/// Integral numbers only. The fill `match` compares `bivar_class` against
/// numbers, so a string class would be painted with the fallback color.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    }
}
