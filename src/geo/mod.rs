//! Spherical geometry primitives.
//!
//! Points are plain latitude/longitude pairs in decimal degrees. Distances are
//! great-circle distances on a sphere, so Earth's flattening is ignored.

mod polygon;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use polygon::{contains, min_distance};

/// Mean Earth radius used by the haversine formula, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Errors raised by the geometry functions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Geographic point (lat/lon)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point without range checks
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a point, rejecting non-finite or out-of-range coordinates
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, GeometryError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeometryError::InvalidArgument(format!(
                "latitude {} is outside [-90, 90]",
                lat
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(GeometryError::InvalidArgument(format!(
                "longitude {} is outside [-180, 180]",
                lon
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Great-circle distance to another point in kilometers
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance(self, other)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Haversine great-circle distance between two points in kilometers.
pub fn distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lon1 = p1.lon.to_radians();
    let lat2 = p2.lat.to_radians();
    let lon2 = p2.lon.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    // Rounding can push `a` slightly past 1 for antipodal points
    let a = ((dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to the 3 decimals reported to callers
pub fn round_km(km: f64) -> f64 {
    (km * 1000.0).round() / 1000.0
}
