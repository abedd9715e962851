use crate::record::{Record, Timestamp};
use serde::{Deserialize, Serialize};

/// Seasonal window in which a dry pond is worth highlighting.
///
/// Months are inclusive on both ends. Ponds are routinely emptied in winter,
/// so dryness outside the window is not flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrynessWindow {
    pub first_month: u32,
    pub last_month: u32,
}

impl Default for DrynessWindow {
    /// March through October.
    fn default() -> Self {
        Self {
            first_month: 3,
            last_month: 10,
        }
    }
}

impl DrynessWindow {
    pub fn contains_month(&self, month: u32) -> bool {
        (self.first_month..=self.last_month).contains(&month)
    }

    /// False when the timestamp has no parseable month.
    pub fn contains(&self, timestamp: &Timestamp) -> bool {
        timestamp.month().map(|m| self.contains_month(m)).unwrap_or(false)
    }

    /// Dry and observed inside the window.
    pub fn matches(&self, record: &Record) -> bool {
        record.dry && self.contains(&record.date)
    }

    /// Records of `active` that are highlighted.
    pub fn highlighted<'a>(
        &'a self,
        records: &'a [Record],
        active: &'a Timestamp,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        records
            .iter()
            .filter(move |record| &record.date == active && self.matches(record))
    }
}
