/// Error types for the etang crates
use thiserror::Error;

/// Main error type for loading and browsing pond snapshots
#[derive(Error, Debug)]
pub enum EtangError {
    /// Input is not valid JSON or does not match the expected shape
    #[error("Failed to parse GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading (or decompressing) the input failed
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Top-level GeoJSON object is something other than a FeatureCollection
    #[error("Expected a FeatureCollection, found {0:?}")]
    NotFeatureCollection(String),

    /// Dataset contains no usable timestamp
    #[error("Dataset {0:?} has no dated records")]
    EmptyDataset(String),

    /// Selector position outside the timeline
    #[error("Selector index {index} out of range (timeline has {len} dates)")]
    SelectorOutOfRange { index: usize, len: usize },

    /// Timestamp not present in the active timeline
    #[error("Unknown date: {0}")]
    UnknownDate(String),

    /// Color string is not `#rrggbb`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Palette name not recognized
    #[error("Unknown palette: {0}")]
    UnknownPalette(String),
}

/// Type alias for Results using EtangError
pub type Result<T> = std::result::Result<T, EtangError>;
