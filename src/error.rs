use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoError>;

/// Every failure the projection subsystem can report.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("invalid {axis} {value}: must be within [{min}, {max}]")]
    InvalidCoordinate {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unit \"{0}\" is not supported; use \"us survey foot\", \"metre\" or \"foot\"")]
    UnsupportedUnit(String),

    #[error(
        "Your coordinates appear to be state plane ({lat}, {lon}); only latitude/longitude input can be resolved to a zone"
    )]
    StatePlaneNotSupported { lat: f64, lon: f64 },

    #[error("no zone contains ({lat}, {lon})")]
    ZoneNotFound { lat: f64, lon: f64 },

    #[error("Unable to find projection for zone \"{zone}\" in unit \"{unit}\"")]
    ProjectionNotFound { zone: String, unit: String },

    #[error("transform failed: {0}")]
    TransformFailure(String),

    #[error("failed to load catalog {path}: {reason}")]
    CatalogLoadFailure { path: PathBuf, reason: String },

    #[error("malformed WKT at byte {position}: {reason}")]
    WktParse { position: usize, reason: String },

    #[error("coordinate system not usable: {0}")]
    UnsupportedProjection(String),
}

impl GeoError {
    pub(crate) fn catalog(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        GeoError::CatalogLoadFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn wkt(position: usize, reason: impl Into<String>) -> Self {
        GeoError::WktParse {
            position,
            reason: reason.into(),
        }
    }
}
