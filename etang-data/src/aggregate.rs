//! Per-snapshot class counts.

use etang_core::class_code::{ClassCode, CLASS_COUNT};
use etang_core::record::{Record, Timestamp};
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Number of ponds in each class at one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounts([u32; CLASS_COUNT]);

impl ClassCounts {
    pub fn get(&self, code: ClassCode) -> u32 {
        self.0[code.index()]
    }

    pub fn increment(&mut self, code: ClassCode) {
        self.0[code.index()] += 1;
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Largest single class count (0 when empty).
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// `(code, count)` in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassCode, u32)> + '_ {
        ClassCode::ALL.into_iter().map(|code| (code, self.get(code)))
    }
}

/// Snapshot → class counts. Always rebuilt from a full record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountTable(BTreeMap<Timestamp, ClassCounts>);

impl CountTable {
    pub fn get(&self, timestamp: &Timestamp) -> Option<&ClassCounts> {
        self.0.get(timestamp)
    }

    /// Distinct snapshots, sorted.
    pub fn timeline(&self) -> Vec<Timestamp> {
        self.0.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Timestamp, &ClassCounts)> {
        self.0.iter()
    }
}

/// Count records per snapshot and class, for all nine classes.
pub fn aggregate(records: &[Record]) -> CountTable {
    aggregate_in_range(records, 1..=CLASS_COUNT as u8)
}

/// Like [`aggregate`], but only codes inside `range` are counted.
///
/// Every snapshot present in `records` gets an entry, even if none of its
/// records lands in range. Records without a class or with a code outside
/// the range are dropped.
///
/// ```rust
/// use etang_core::record::{Record, Timestamp};
/// use etang_data::aggregate::aggregate;
///
/// let records = vec![
///     Record::new("2018-01", "a", Some(3)),
///     Record::new("2018-01", "b", Some(3)),
///     Record::new("2018-02", "a", Some(9)),
/// ];
/// let table = aggregate(&records);
/// assert_eq!(table.get(&Timestamp::from("2018-01")).unwrap().total(), 2);
/// ```
pub fn aggregate_in_range(records: &[Record], range: RangeInclusive<u8>) -> CountTable {
    let mut table: BTreeMap<Timestamp, ClassCounts> = BTreeMap::new();
    let mut dropped = 0usize;
    for record in records {
        let counts = table.entry(record.date.clone()).or_default();
        match record.class_code().filter(|code| range.contains(&code.value())) {
            Some(code) => counts.increment(code),
            None => dropped += 1,
        }
    }
    log::info!(
        "[Etangs] aggregate: {} records over {} dates, {} without a counted class",
        records.len(),
        table.len(),
        dropped
    );
    CountTable(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: u8) -> ClassCode {
        ClassCode::new(value).unwrap()
    }

    fn sample() -> Vec<Record> {
        vec![
            Record::new("2018-01", "a", Some(3)),
            Record::new("2018-01", "b", Some(3)),
            Record::new("2018-02", "a", Some(9)),
        ]
    }

    #[test]
    fn test_scenario_counts() {
        let table = aggregate(&sample());
        assert_eq!(table.len(), 2);

        let january = table.get(&Timestamp::from("2018-01")).unwrap();
        for (c, count) in january.iter() {
            assert_eq!(count, if c.value() == 3 { 2 } else { 0 });
        }

        let february = table.get(&Timestamp::from("2018-02")).unwrap();
        for (c, count) in february.iter() {
            assert_eq!(count, if c.value() == 9 { 1 } else { 0 });
        }
    }

    #[test]
    fn test_order_independent() {
        let mut records = vec![
            Record::new("2018-03-01", "a", Some(1)),
            Record::new("2018-03-01", "b", Some(5)),
            Record::new("2018-04-01", "a", Some(5)),
            Record::new("2018-03-01", "c", Some(12)),
            Record::new("2018-04-01", "b", None),
            Record::new("2018-04-01", "c", Some(2)),
        ];
        let expected = aggregate(&records);
        records.reverse();
        assert_eq!(aggregate(&records), expected);
        records.rotate_left(2);
        assert_eq!(aggregate(&records), expected);
    }

    #[test]
    fn test_sum_matches_in_range_records() {
        let records = vec![
            Record::new("2018-03-01", "a", Some(1)),
            Record::new("2018-03-01", "b", Some(0)),
            Record::new("2018-03-01", "c", Some(10)),
            Record::new("2018-03-01", "d", None),
            Record::new("2018-03-01", "e", Some(9)),
        ];
        let table = aggregate(&records);
        let counts = table.get(&Timestamp::from("2018-03-01")).unwrap();
        assert_eq!(counts.total(), 2);
        assert_eq!(counts.get(code(1)), 1);
        assert_eq!(counts.get(code(9)), 1);
    }

    #[test]
    fn test_date_without_valid_class_still_listed() {
        let records = vec![Record::new("2018-06-01", "a", Some(42))];
        let table = aggregate(&records);
        assert_eq!(table.timeline(), vec![Timestamp::from("2018-06-01")]);
        assert_eq!(table.get(&Timestamp::from("2018-06-01")).unwrap().total(), 0);
    }

    #[test]
    fn test_narrow_range_drops_other_codes() {
        let records = vec![
            Record::new("2018-01", "a", Some(1)),
            Record::new("2018-01", "b", Some(5)),
            Record::new("2018-01", "c", Some(6)),
        ];
        let table = aggregate_in_range(&records, 4..=6);
        let counts = table.get(&Timestamp::from("2018-01")).unwrap();
        assert_eq!(counts.get(code(1)), 0);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_timeline_is_sorted_and_distinct() {
        let records = vec![
            Record::new("2018-10-01", "a", Some(1)),
            Record::new("2018-02-01", "a", Some(1)),
            Record::new("2018-10-01", "b", Some(1)),
        ];
        let timeline = aggregate(&records).timeline();
        assert_eq!(
            timeline,
            vec![Timestamp::from("2018-02-01"), Timestamp::from("2018-10-01")]
        );
    }

    #[test]
    fn test_empty_input() {
        let table = aggregate(&[]);
        assert!(table.is_empty());
        assert!(table.timeline().is_empty());
    }
}
