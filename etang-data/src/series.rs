//! Per-pond time series, used for popups and pond summaries.

use etang_core::class_code::ClassCode;
use etang_core::record::{PondId, Record, Timestamp};
use serde::Serialize;
use std::collections::HashMap;

/// One pond at one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PondObservation {
    pub date: Timestamp,
    pub class_code: Option<ClassCode>,
    pub dry: bool,
    pub ndvi: Option<f64>,
    pub water_frequency: Option<f64>,
}

/// How a pond moved through the classes over the season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dynamics {
    /// Never changed class.
    Stable,
    /// Changed, but ended where it started.
    Cyclic,
    /// Changed and ended in another class.
    Transition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PondSeries {
    pub pond_id: PondId,
    /// Sorted by date.
    pub points: Vec<PondObservation>,
}

impl PondSeries {
    /// Number of class changes between adjacent snapshots. A pair with an
    /// unclassified side never counts, so `[3, None, 6]` has no change.
    pub fn class_changes(&self) -> usize {
        self.points
            .windows(2)
            .filter(|w| match (w[0].class_code, w[1].class_code) {
                (Some(prev), Some(next)) => prev != next,
                _ => false,
            })
            .count()
    }

    /// `None` when the pond was never classified.
    pub fn dynamics(&self) -> Option<Dynamics> {
        let mut classified = self.points.iter().filter_map(|p| p.class_code);
        let first = classified.next()?;
        let last = classified.last().unwrap_or(first);
        Some(match self.class_changes() {
            0 => Dynamics::Stable,
            _ if first == last => Dynamics::Cyclic,
            _ => Dynamics::Transition,
        })
    }

    pub fn summary(&self) -> PondSummary {
        PondSummary {
            pond_id: self.pond_id.clone(),
            observations: self.points.len(),
            dry_count: self.points.iter().filter(|p| p.dry).count(),
            mean_ndvi: mean(self.points.iter().filter_map(|p| p.ndvi)),
            mean_water_frequency: mean(self.points.iter().filter_map(|p| p.water_frequency)),
            class_changes: self.class_changes(),
            dynamics: self.dynamics(),
        }
    }
}

/// Season-level figures for one pond.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PondSummary {
    pub pond_id: PondId,
    pub observations: usize,
    pub dry_count: usize,
    pub mean_ndvi: Option<f64>,
    pub mean_water_frequency: Option<f64>,
    pub class_changes: usize,
    pub dynamics: Option<Dynamics>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Pond id → series, built once per dataset.
#[derive(Debug, Clone, Default)]
pub struct PondIndex(HashMap<PondId, PondSeries>);

impl PondIndex {
    pub fn build(records: &[Record]) -> Self {
        let mut index: HashMap<PondId, PondSeries> = HashMap::new();
        for record in records {
            index
                .entry(record.pond_id.clone())
                .or_insert_with(|| PondSeries {
                    pond_id: record.pond_id.clone(),
                    points: Vec::new(),
                })
                .points
                .push(PondObservation {
                    date: record.date.clone(),
                    class_code: record.class_code(),
                    dry: record.dry,
                    ndvi: record.ndvi,
                    water_frequency: record.water_frequency,
                });
        }
        for series in index.values_mut() {
            series.points.sort_by(|a, b| a.date.cmp(&b.date));
        }
        Self(index)
    }

    pub fn get(&self, pond_id: &PondId) -> Option<&PondSeries> {
        self.0.get(pond_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Summaries sorted by pond id.
    pub fn summaries(&self) -> Vec<PondSummary> {
        let mut summaries: Vec<PondSummary> = self.0.values().map(PondSeries::summary).collect();
        summaries.sort_by(|a, b| a.pond_id.cmp(&b.pond_id));
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_of(classes: &[Option<i64>]) -> PondSeries {
        let records: Vec<Record> = classes
            .iter()
            .enumerate()
            .map(|(month, class)| Record::new(format!("2018-{:02}-01", month + 1).as_str(), "p", *class))
            .collect();
        PondIndex::build(&records)
            .get(&PondId::from("p"))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_points_sorted_by_date() {
        let records = vec![
            Record::new("2018-09-01", "1", Some(1)),
            Record::new("2018-03-01", "1", Some(2)),
            Record::new("2018-03-01", "2", Some(3)),
        ];
        let index = PondIndex::build(&records);
        assert_eq!(index.len(), 2);
        let dates: Vec<&str> = index
            .get(&PondId::from("1"))
            .unwrap()
            .points
            .iter()
            .map(|p| p.date.as_str())
            .collect();
        assert_eq!(dates, vec!["2018-03-01", "2018-09-01"]);
    }

    #[test]
    fn test_unknown_pond_has_no_series() {
        let index = PondIndex::build(&[Record::new("2018-03-01", "1", Some(1))]);
        assert!(index.get(&PondId::from("404")).is_none());
    }

    #[test]
    fn test_dynamics() {
        assert_eq!(series_of(&[Some(5), Some(5), None, Some(5)]).dynamics(), Some(Dynamics::Stable));
        assert_eq!(series_of(&[Some(5), Some(2), Some(5)]).dynamics(), Some(Dynamics::Cyclic));
        assert_eq!(series_of(&[Some(5), Some(2), Some(1)]).dynamics(), Some(Dynamics::Transition));
        assert_eq!(series_of(&[None, None]).dynamics(), None);
        assert_eq!(series_of(&[Some(5)]).dynamics(), Some(Dynamics::Stable));
    }

    #[test]
    fn test_unclassified_points_break_changes() {
        let series = series_of(&[Some(3), None, Some(6)]);
        assert_eq!(series.class_changes(), 0);
        assert_eq!(series.dynamics(), Some(Dynamics::Stable));

        // 12 is outside the class range, so it is unclassified too
        let series = series_of(&[Some(3), Some(6), Some(12), Some(6)]);
        assert_eq!(series.class_changes(), 1);
        assert_eq!(series.dynamics(), Some(Dynamics::Transition));
    }

    #[test]
    fn test_summary_means_ignore_missing() {
        let records = vec![
            Record::new("2018-03-01", "1", Some(1))
                .with_dry(true)
                .with_metrics(Some(0.2), None),
            Record::new("2018-04-01", "1", Some(1)).with_metrics(Some(0.4), Some(0.5)),
            Record::new("2018-05-01", "1", Some(1)),
        ];
        let summaries = PondIndex::build(&records).summaries();
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.observations, 3);
        assert_eq!(summary.dry_count, 1);
        assert!((summary.mean_ndvi.unwrap() - 0.3).abs() < 1e-9);
        assert_eq!(summary.mean_water_frequency, Some(0.5));
    }
}
