//! Bar chart payload: one bar per class.

use crate::aggregate::ClassCounts;
use etang_core::palette::{ColorTable, Rgb};
use serde::Serialize;

/// A single bar of the class-count chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBar {
    pub code: u8,
    pub count: u32,
    pub color: Rgb,
}

/// Bars in ascending code order, colored with `table`.
pub fn class_bars(counts: &ClassCounts, table: &ColorTable) -> Vec<ClassBar> {
    counts
        .iter()
        .map(|(code, count)| ClassBar {
            code: code.value(),
            count,
            color: table.color_of_code(code),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use etang_core::class_code::ClassCode;
    use etang_core::palette::Palette;

    #[test]
    fn test_one_bar_per_class() {
        let mut counts = ClassCounts::default();
        counts.increment(ClassCode::new(4).unwrap());
        counts.increment(ClassCode::new(4).unwrap());
        let bars = class_bars(&counts, Palette::Etangs.table());
        assert_eq!(bars.len(), 9);
        assert_eq!(bars.iter().map(|b| b.code).collect::<Vec<_>>(), (1..=9).collect::<Vec<u8>>());
        assert_eq!(bars[3].count, 2);
        assert_eq!(bars[3].color, Palette::Etangs.table().color_of(4));
    }

    #[test]
    fn test_serializes_color_as_hex() {
        let bars = class_bars(&ClassCounts::default(), Palette::Etangs.table());
        let json = serde_json::to_value(&bars[0]).unwrap();
        assert_eq!(json["color"], "#edf8fb");
        assert_eq!(json["count"], 0);
    }
}
