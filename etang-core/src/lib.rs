//! Core types for pond ("étang") state snapshots.
//!
//! - `class_code` / `palette`: the 3×3 bivariate classification and its colors
//! - `record` / `geojson`: the typed record schema and the GeoJSON load boundary
//! - `dryness`: the seasonal dryness window predicate
//! - `style`: style expressions and filter descriptors handed to the map renderer

pub mod class_code;
pub mod dryness;
pub mod error;
pub mod geojson;
pub mod palette;
pub mod record;
pub mod style;

pub use error::{EtangError, Result};
