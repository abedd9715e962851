//! Dataset files on disk.

use anyhow::Context;
use etang_core::geojson::Dataset;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Whether `path` names a gzip-compressed file.
pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Read a GeoJSON dataset, decompressing `.gz` files.
pub fn open_dataset(path: &str) -> anyhow::Result<Dataset> {
    let path = Path::new(path);
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let reader = BufReader::new(file);
    let dataset = if is_gzip(path) {
        Dataset::from_gzip_reader(reader)
    } else {
        Dataset::from_reader(reader)
    }
    .with_context(|| format!("{} is not a valid pond dataset", path.display()))?;
    log::info!(
        "Loaded {} records from {} ({} skipped)",
        dataset.records.len(),
        path.display(),
        dataset.skipped
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_gzip() {
        assert!(is_gzip(Path::new("data/etangs_mensuel_2018.geojson.gz")));
        assert!(is_gzip(Path::new("a.GZ")));
        assert!(!is_gzip(Path::new("data/etangs_mensuel_2018.geojson")));
        assert!(!is_gzip(Path::new("gz")));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = open_dataset("/nonexistent/ponds.geojson").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/ponds.geojson"));
    }
}
