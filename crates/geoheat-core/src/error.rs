// crates/geoheat-core/src/error.rs
use thiserror::Error;

/// Errors raised at the I/O boundary of the engine.
///
/// The engine components themselves are total: normalizing, colouring,
/// centroid and nearest-centre resolution never fail. Only loading a
/// geography file or an engine configuration can.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Long-form alias of [`GeoError`].
pub type GeoHeatError = GeoError;

pub type Result<T> = std::result::Result<T, GeoError>;
