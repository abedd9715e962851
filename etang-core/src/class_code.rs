use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of bivariate classes (3 vegetation levels × 3 water levels).
pub const CLASS_COUNT: usize = 9;

/// One of the three ordinal levels of a classified indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// All levels, lowest first.
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    pub fn index(self) -> u8 {
        match self {
            Level::Low => 0,
            Level::Medium => 1,
            Level::High => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Level> {
        match index {
            0 => Some(Level::Low),
            1 => Some(Level::Medium),
            2 => Some(Level::High),
            _ => None,
        }
    }
}

/// A bivariate class code in `1..=9`.
///
/// The code crosses a vegetation level (NDVI) with a water frequency level:
/// `code = vegetation * 3 + water + 1`. This is the same assignment the
/// upstream pipeline uses when it writes `bivar_class`, so colors, legend and
/// data always agree on which cell a code denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ClassCode(u8);

impl ClassCode {
    /// All nine codes in ascending order.
    pub const ALL: [ClassCode; CLASS_COUNT] = [
        ClassCode(1),
        ClassCode(2),
        ClassCode(3),
        ClassCode(4),
        ClassCode(5),
        ClassCode(6),
        ClassCode(7),
        ClassCode(8),
        ClassCode(9),
    ];

    /// Returns `None` for anything outside `1..=9`.
    pub fn new(code: u8) -> Option<ClassCode> {
        (1..=CLASS_COUNT as u8).contains(&code).then_some(ClassCode(code))
    }

    /// Accepts the wider integer type records carry.
    pub fn from_raw(raw: i64) -> Option<ClassCode> {
        u8::try_from(raw).ok().and_then(ClassCode::new)
    }

    pub fn from_levels(vegetation: Level, water: Level) -> ClassCode {
        ClassCode(vegetation.index() * 3 + water.index() + 1)
    }

    /// `(vegetation, water)` levels of this code.
    pub fn levels(self) -> (Level, Level) {
        let zero_based = self.0 - 1;
        // both divisions land in 0..=2 for a valid code
        let vegetation = Level::from_index(zero_based / 3).unwrap_or(Level::Low);
        let water = Level::from_index(zero_based % 3).unwrap_or(Level::Low);
        (vegetation, water)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based position, for indexing per-class arrays.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for ClassCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ClassCode::new(value).ok_or_else(|| format!("class code {} outside 1..=9", value))
    }
}

impl From<ClassCode> for u8 {
    fn from(code: ClassCode) -> u8 {
        code.0
    }
}

impl fmt::Display for ClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
