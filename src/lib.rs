//! Ringroad - tells whether an address lies inside a city ring road
//!
//! This library holds the geometry, boundary, geocoder and HTTP layers used by
//! the `server` binary.

pub mod api;
pub mod boundary;
pub mod config;
pub mod geo;
pub mod geocoder;
pub mod service;

pub use boundary::RingRoad;
pub use geo::{GeoPoint, GeometryError};
pub use service::{Assessment, DistanceService};
