// crates/geoheat-core/src/loader.rs
#![cfg(feature = "json")]

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates to the raw
//! GeoJSON parser and the raw -> domain converter. This is the only fallible
//! part of the crate.

use crate::config::EngineConfig;
use crate::convert::from_raw;
use crate::error::{GeoError, Result};
use crate::geometry::GeoFeature;
use crate::raw::FeatureCollectionRaw;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

// Single in-process cache so the bundled sample is parsed only once.
static SAMPLE_CACHE: OnceCell<Vec<GeoFeature>> = OnceCell::new();

/// Directory holding the bundled sample geography.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "sample_countries.geojson"
}

/// **Sample Loader:** the small bundled geography, parsed once per process.
pub fn load_sample_features() -> Result<Vec<GeoFeature>> {
    SAMPLE_CACHE
        .get_or_try_init(|| load_features(default_data_dir().join(default_dataset_filename())))
        .cloned()
}

/// **Standard Loader:** reads a GeoJSON `FeatureCollection` file.
///
/// Files ending in `.gz` are decompressed on the fly when the `compact`
/// feature is enabled.
pub fn load_features(path: impl AsRef<Path>) -> Result<Vec<GeoFeature>> {
    let path = path.as_ref();
    // 1. Shared transport logic
    let reader = open_stream(path)?;
    // 2. Payload parsing
    let raw: FeatureCollectionRaw = serde_json::from_reader(reader).map_err(parse_error)?;
    // 3. Domain conversion
    let features = from_raw(raw);
    tracing::debug!(path = %path.display(), features = features.len(), "loaded geography");
    Ok(features)
}

/// Parses a GeoJSON `FeatureCollection` held in memory.
pub fn features_from_str(json: &str) -> Result<Vec<GeoFeature>> {
    let raw: FeatureCollectionRaw = serde_json::from_str(json)?;
    Ok(from_raw(raw))
}

/// Reads an [`EngineConfig`] from a JSON file (optionally gzipped).
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineConfig> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let config: EngineConfig = serde_json::from_reader(reader).map_err(parse_error)?;
    tracing::debug!(path = %path.display(), "loaded engine config");
    Ok(config)
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPER
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`. Returns a generic reader so callers don't care about the
/// compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            GeoError::NotFound(format!("File not found at {}: {}", path.display(), e))
        }
        _ => GeoError::Io(e),
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GeoError::InvalidData(format!(
            "{} is gzipped but 'compact' is disabled",
            path.display()
        )))
    }
}

/// A read that fails halfway (bad gzip stream, a directory) is an I/O
/// error, not a JSON one.
fn parse_error(e: serde_json::Error) -> GeoError {
    if e.is_io() {
        GeoError::Io(e.into())
    } else {
        GeoError::Json(e)
    }
}
