//! 3×3 bivariate legend layout.
//!
//! The top row is the wettest (highest water frequency), columns go from bare
//! to vegetated. Cell sizes optionally follow the class counts of the active
//! snapshot.

use crate::aggregate::ClassCounts;
use etang_core::class_code::{ClassCode, Level};
use etang_core::palette::{ColorTable, Rgb};
use serde::{Deserialize, Serialize};

/// Cell sizes in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendSizing {
    /// Size of every cell when no counts are shown.
    pub fixed_px: f64,
    /// Size of empty classes.
    pub min_px: f64,
    /// Size of the most populated class.
    pub max_px: f64,
}

impl Default for LegendSizing {
    fn default() -> Self {
        Self {
            fixed_px: 28.0,
            min_px: 10.0,
            max_px: 40.0,
        }
    }
}

impl LegendSizing {
    /// Linear in `count / max_count`; `min_px` when `max_count` is zero.
    pub fn cell_size(&self, count: u32, max_count: u32) -> f64 {
        if max_count == 0 {
            return self.min_px;
        }
        let ratio = (f64::from(count) / f64::from(max_count)).clamp(0.0, 1.0);
        self.min_px + (self.max_px - self.min_px) * ratio
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendCell {
    /// 0 is the top row.
    pub row: usize,
    pub column: usize,
    pub code: ClassCode,
    pub color: Rgb,
    pub size_px: f64,
    pub count: Option<u32>,
}

/// Nine cells, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLayout {
    pub cells: Vec<LegendCell>,
}

impl LegendLayout {
    pub fn rows(&self) -> impl Iterator<Item = &[LegendCell]> {
        self.cells.chunks(3)
    }

    pub fn cell(&self, code: ClassCode) -> Option<&LegendCell> {
        self.cells.iter().find(|cell| cell.code == code)
    }
}

/// Class shown at a grid position: row `r` is water level `2 - r`,
/// column `c` is vegetation level `c`.
pub fn code_at(row: usize, column: usize) -> Option<ClassCode> {
    let water = Level::from_index(2u8.checked_sub(u8::try_from(row).ok()?)?)?;
    let vegetation = Level::from_index(u8::try_from(column).ok()?)?;
    Some(ClassCode::from_levels(vegetation, water))
}

/// Lay out the legend, sized by `counts` when given.
///
/// ```rust
/// use etang_core::palette::Palette;
/// use etang_data::legend::{layout_legend, LegendSizing};
///
/// let layout = layout_legend(Palette::Etangs.table(), None, &LegendSizing::default());
/// assert_eq!(layout.cells.len(), 9);
/// // top-left: bare and wet
/// assert_eq!(layout.cells[0].code.value(), 3);
/// ```
pub fn layout_legend(
    table: &ColorTable,
    counts: Option<&ClassCounts>,
    sizing: &LegendSizing,
) -> LegendLayout {
    let max_count = counts.map(ClassCounts::max).unwrap_or(0);
    let mut cells = Vec::with_capacity(9);
    for row in 0..3 {
        for column in 0..3 {
            let Some(code) = code_at(row, column) else {
                continue;
            };
            let count = counts.map(|c| c.get(code));
            let size_px = match count {
                Some(count) => sizing.cell_size(count, max_count),
                None => sizing.fixed_px,
            };
            cells.push(LegendCell {
                row,
                column,
                code,
                color: table.color_of_code(code),
                size_px,
                count,
            });
        }
    }
    LegendLayout { cells }
}
