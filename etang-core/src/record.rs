use crate::class_code::ClassCode;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format of snapshot timestamps: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A snapshot timestamp as written in the data (`YYYY-MM-DD` or `YYYY-MM`).
///
/// Ordering and equality are those of the raw string: the upstream data is
/// zero-padded, so lexical order is chronological order, and two records share
/// a snapshot only if their strings are identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Calendar month (1..=12), if the timestamp parses as a date or year-month.
    pub fn month(&self) -> Option<u32> {
        let raw = self.0.trim();
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", raw), DATE_FORMAT))
            .ok()
            .map(|date| date.month())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::new(value)
    }
}

/// Identifier of a pond, stable across snapshots.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PondId(String);

impl PondId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PondId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PondId {
    fn from(value: &str) -> Self {
        PondId::new(value)
    }
}

/// One pond observed at one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: Timestamp,
    /// Raw `bivar_class`; `None` when the pond could not be classified.
    pub class_value: Option<i64>,
    pub pond_id: PondId,
    /// `assec`: the pond was recorded dry at this date.
    pub dry: bool,
    pub ndvi: Option<f64>,
    /// `freq_eau`: share of the pond covered by water.
    pub water_frequency: Option<f64>,
}

impl Record {
    pub fn new(date: impl Into<Timestamp>, pond_id: impl Into<PondId>, class_value: Option<i64>) -> Self {
        Self {
            date: date.into(),
            class_value,
            pond_id: pond_id.into(),
            dry: false,
            ndvi: None,
            water_frequency: None,
        }
    }

    pub fn with_dry(mut self, dry: bool) -> Self {
        self.dry = dry;
        self
    }

    pub fn with_metrics(mut self, ndvi: Option<f64>, water_frequency: Option<f64>) -> Self {
        self.ndvi = ndvi;
        self.water_frequency = water_frequency;
        self
    }

    /// The class code, if the raw value lies in `1..=9`.
    pub fn class_code(&self) -> Option<ClassCode> {
        self.class_value.and_then(ClassCode::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_month() {
        assert_eq!(Timestamp::from("2018-11-15").month(), Some(11));
        assert_eq!(Timestamp::from("2018-04").month(), Some(4));
        assert_eq!(Timestamp::from("Bande_3").month(), None);
        assert_eq!(Timestamp::from("2018-13-01").month(), None);
    }

    #[test]
    fn test_timestamp_order_is_lexical() {
        let mut dates = vec![
            Timestamp::from("2018-10-01"),
            Timestamp::from("2018-02-01"),
            Timestamp::from("2018-02-15"),
        ];
        dates.sort();
        let sorted: Vec<&str> = dates.iter().map(Timestamp::as_str).collect();
        assert_eq!(sorted, vec!["2018-02-01", "2018-02-15", "2018-10-01"]);
        assert_ne!(Timestamp::from("2018-02"), Timestamp::from("2018-02-01"));
    }

    #[test]
    fn test_record_class_code() {
        let record = Record::new("2018-01-01", "7", Some(9));
        assert_eq!(record.class_code().map(|c| c.value()), Some(9));
        assert!(Record::new("2018-01-01", "7", Some(12)).class_code().is_none());
        assert!(Record::new("2018-01-01", "7", None).class_code().is_none());
    }
}
