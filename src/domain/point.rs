use std::fmt;

use crate::error::{GeoError, Result};

const DECIMAL_PLACES: f64 = 1_000_000.0;

fn round6(value: f64) -> f64 {
    (value * DECIMAL_PLACES).round() / DECIMAL_PLACES
}

fn checked(axis: &'static str, value: f64, limit: f64) -> Result<f64> {
    if !(-limit..=limit).contains(&value) {
        return Err(GeoError::InvalidCoordinate {
            axis,
            value,
            min: -limit,
            max: limit,
        });
    }
    Ok(round6(value))
}

/// A validated WGS84 latitude/longitude pair.
///
/// Both axes are rounded to 6 decimal places (about 0.1 m) on assignment,
/// so two points built from inputs that agree to that precision compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a point, failing with `InvalidCoordinate` when latitude is
    /// outside [-90, 90] or longitude outside [-180, 180]. NaN is rejected.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            latitude: checked("latitude", latitude, 90.0)?,
            longitude: checked("longitude", longitude, 180.0)?,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Replace the latitude. The point is left untouched on error.
    pub fn set_latitude(&mut self, latitude: f64) -> Result<()> {
        self.latitude = checked("latitude", latitude, 90.0)?;
        Ok(())
    }

    /// Replace the longitude. The point is left untouched on error.
    pub fn set_longitude(&mut self, longitude: f64) -> Result<()> {
        self.longitude = checked("longitude", longitude, 180.0)?;
        Ok(())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.longitude, point.latitude)
    }
}

impl TryFrom<geo::Point<f64>> for GeoPoint {
    type Error = GeoError;

    fn try_from(point: geo::Point<f64>) -> Result<Self> {
        GeoPoint::new(point.y(), point.x())
    }
}
