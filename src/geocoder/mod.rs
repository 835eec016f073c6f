//! Address to coordinate resolution.

mod yandex;

use async_trait::async_trait;
use thiserror::Error;

use crate::geo::GeoPoint;

pub use yandex::YandexGeocoder;

#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The service answered but had no usable result for the address
    #[error("no geocoding result for '{0}'")]
    NotFound(String),

    /// The service could not be reached or answered with garbage
    #[error("geocoding service unavailable: {0}")]
    Unavailable(String),
}

/// Resolves free-text addresses to coordinates
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError>;
}
