//! Bivariate color tables.
//!
//! Each palette is a fixed `ColorTable`: one color per class code plus a
//! neutral fallback for missing or out-of-range codes. Tables are `'static`
//! and never change after startup; a session picks one [`Palette`].

use crate::class_code::{ClassCode, CLASS_COUNT};
use crate::error::EtangError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An opaque 24-bit color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = EtangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| EtangError::InvalidColor(s.to_string()))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| EtangError::InvalidColor(s.to_string()))
        };
        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = EtangError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Neutral gray used for anything that is not a valid class code.
pub const FALLBACK_GRAY: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);

/// Class code → color, plus a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: [Rgb; CLASS_COUNT],
    fallback: Rgb,
}

impl ColorTable {
    /// `colors[i]` is the color of class code `i + 1`.
    pub const fn new(colors: [Rgb; CLASS_COUNT], fallback: Rgb) -> Self {
        Self { colors, fallback }
    }

    pub fn color_of_code(&self, code: ClassCode) -> Rgb {
        self.colors[code.index()]
    }

    /// Color for a raw property value; out-of-range values get the fallback.
    pub fn color_of(&self, raw: i64) -> Rgb {
        ClassCode::from_raw(raw)
            .map(|code| self.color_of_code(code))
            .unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> Rgb {
        self.fallback
    }

    /// `(code, color)` pairs in ascending code order.
    pub fn entries(&self) -> impl Iterator<Item = (ClassCode, Rgb)> + '_ {
        ClassCode::ALL.into_iter().map(|code| (code, self.color_of_code(code)))
    }
}

// Greens for vegetation, blues for water, in code order
// (vegetation * 3 + water + 1).
static ETANGS: ColorTable = ColorTable::new(
    [
        Rgb::new(0xed, 0xf8, 0xfb),
        Rgb::new(0xc6, 0xc4, 0xe8),
        Rgb::new(0x2f, 0x6b, 0xff),
        Rgb::new(0x8f, 0xd1, 0x8f),
        Rgb::new(0x7a, 0x7f, 0xd1),
        Rgb::new(0x4b, 0x5b, 0xc0),
        Rgb::new(0x1e, 0x8f, 0x4e),
        Rgb::new(0x5a, 0x5a, 0xa6),
        Rgb::new(0x2e, 0x2e, 0x7f),
    ],
    FALLBACK_GRAY,
);

// Pink (vegetation) × teal (water) bivariate scheme.
static STEVENS: ColorTable = ColorTable::new(
    [
        Rgb::new(0xe8, 0xe8, 0xe8),
        Rgb::new(0xac, 0xe4, 0xe4),
        Rgb::new(0x5a, 0xc8, 0xc8),
        Rgb::new(0xdf, 0xb0, 0xd6),
        Rgb::new(0xa5, 0xad, 0xd3),
        Rgb::new(0x56, 0x98, 0xb9),
        Rgb::new(0xbe, 0x64, 0xac),
        Rgb::new(0x8c, 0x62, 0xaa),
        Rgb::new(0x3b, 0x49, 0x94),
    ],
    FALLBACK_GRAY,
);

/// Available palette variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Etangs,
    Stevens,
}

impl Palette {
    pub fn table(self) -> &'static ColorTable {
        match self {
            Palette::Etangs => &ETANGS,
            Palette::Stevens => &STEVENS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Palette::Etangs => "etangs",
            Palette::Stevens => "stevens",
        }
    }
}

impl FromStr for Palette {
    type Err = EtangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "etangs" => Ok(Palette::Etangs),
            "stevens" => Ok(Palette::Stevens),
            _ => Err(EtangError::UnknownPalette(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_code::Level;

    #[test]
    fn test_every_code_has_a_stable_color() {
        let table = Palette::Etangs.table();
        for code in ClassCode::ALL {
            let first = table.color_of(i64::from(code.value()));
            assert_eq!(first, table.color_of(i64::from(code.value())));
            assert_ne!(first, table.fallback());
        }
    }

    #[test]
    fn test_out_of_range_is_fallback() {
        for table in [Palette::Etangs.table(), Palette::Stevens.table()] {
            for raw in [0, 10, -3, 42, i64::MAX] {
                assert_eq!(table.color_of(raw), FALLBACK_GRAY);
            }
        }
        assert_eq!(FALLBACK_GRAY.to_hex(), "#cccccc");
    }

    #[test]
    fn test_etangs_high_water_is_blue() {
        let table = Palette::Etangs.table();
        let wet_bare = ClassCode::from_levels(Level::Low, Level::High);
        let dry_green = ClassCode::from_levels(Level::High, Level::Low);
        assert_eq!(table.color_of_code(wet_bare).to_hex(), "#2f6bff");
        assert_eq!(table.color_of_code(dry_green).to_hex(), "#1e8f4e");
    }

    #[test]
    fn test_rgb_parse_and_display() {
        let color: Rgb = "#1E8F4E".parse().unwrap();
        assert_eq!(color, Rgb::new(0x1e, 0x8f, 0x4e));
        assert_eq!(color.to_string(), "#1e8f4e");
        assert!("1e8f4e".parse::<Rgb>().is_err());
        assert!("#1e8f4".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rgb_serializes_as_hex() {
        let json = serde_json::to_string(&Rgb::new(255, 215, 0)).unwrap();
        assert_eq!(json, "\"#ffd700\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(255, 215, 0));
    }

    #[test]
    fn test_palette_from_str() {
        assert_eq!("Stevens".parse::<Palette>().unwrap(), Palette::Stevens);
        assert_eq!("etangs".parse::<Palette>().unwrap(), Palette::Etangs);
        assert!("viridis".parse::<Palette>().is_err());
    }
}
