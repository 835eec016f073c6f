//! Distance service: geocode an address and place it relative to the ring.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::boundary::RingRoad;
use crate::geo::{GeoPoint, GeometryError};
use crate::geocoder::{GeocodeError, Geocoder};

/// Where an address lies relative to the ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Assessment {
    Inside,
    /// Kilometers to the nearest ring vertex, rounded to 3 decimals
    Outside { distance_km: f64 },
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("address is empty")]
    EmptyAddress,

    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

pub struct DistanceService {
    geocoder: Arc<dyn Geocoder>,
    ring: RingRoad,
}

impl DistanceService {
    pub fn new(geocoder: Arc<dyn Geocoder>, ring: RingRoad) -> Self {
        Self { geocoder, ring }
    }

    pub fn ring(&self) -> &RingRoad {
        &self.ring
    }

    /// Place an already resolved point
    pub fn assess_point(&self, point: &GeoPoint) -> Result<Assessment, GeometryError> {
        if self.ring.contains(point)? {
            return Ok(Assessment::Inside);
        }
        let distance_km = self.ring.min_distance(point)?;
        Ok(Assessment::Outside { distance_km })
    }

    /// Geocode the address and place it
    pub async fn assess(&self, address: &str) -> Result<Assessment, ServiceError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ServiceError::EmptyAddress);
        }

        let point = self.geocoder.geocode(address).await?;
        let assessment = self.assess_point(&point)?;

        match assessment {
            Assessment::Inside => info!("'{}' at {} is inside {}", address, point, self.ring.name()),
            Assessment::Outside { distance_km } => info!(
                "'{}' at {} is {:.3} km outside {}",
                address,
                point,
                distance_km,
                self.ring.name()
            ),
        }

        Ok(assessment)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Geocoder answering from a fixed table
    #[derive(Default)]
    pub(crate) struct StubGeocoder {
        pub(crate) points: HashMap<String, GeoPoint>,
        pub(crate) unavailable: bool,
        pub(crate) calls: AtomicUsize,
    }

    impl StubGeocoder {
        pub(crate) fn with_fixtures() -> Self {
            let mut points = HashMap::new();
            points.insert(
                "Садовая-Кудринская улица, 1, Москва".to_string(),
                GeoPoint::new(55.7589, 37.5846),
            );
            points.insert(
                "Театральная площадь, 1, Калуга".to_string(),
                GeoPoint::new(54.5138, 36.26373),
            );
            Self {
                points,
                ..Self::default()
            }
        }

        pub(crate) fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl Geocoder for StubGeocoder {
        async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.unavailable {
                return Err(GeocodeError::Unavailable("stubbed outage".to_string()));
            }
            self.points
                .get(address)
                .copied()
                .ok_or_else(|| GeocodeError::NotFound(address.to_string()))
        }
    }

    fn service(geocoder: StubGeocoder) -> DistanceService {
        DistanceService::new(Arc::new(geocoder), RingRoad::mkad())
    }

    #[tokio::test]
    async fn test_inside() {
        let service = service(StubGeocoder::with_fixtures());
        let result = service.assess("Садовая-Кудринская улица, 1, Москва").await.unwrap();
        assert_eq!(result, Assessment::Inside);
    }

    #[tokio::test]
    async fn test_outside() {
        let service = service(StubGeocoder::with_fixtures());
        let result = service.assess("  Театральная площадь, 1, Калуга ").await.unwrap();
        assert_eq!(result, Assessment::Outside { distance_km: 144.249 });
    }

    #[tokio::test]
    async fn test_empty_address_skips_geocoder() {
        let geocoder = Arc::new(StubGeocoder::with_fixtures());
        let service = DistanceService::new(geocoder.clone(), RingRoad::mkad());

        assert!(matches!(service.assess("   ").await, Err(ServiceError::EmptyAddress)));
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_address() {
        let service = service(StubGeocoder::with_fixtures());
        let err = service.assess("INVALID ADRESS 100").await.unwrap_err();
        assert!(matches!(err, ServiceError::Geocode(GeocodeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_geocoder_unavailable() {
        let service = service(StubGeocoder::unavailable());
        let err = service.assess("Садовая-Кудринская улица, 1, Москва").await.unwrap_err();
        assert!(matches!(err, ServiceError::Geocode(GeocodeError::Unavailable(_))));
    }

    #[test]
    fn test_assess_point_vertex() {
        let service = service(StubGeocoder::default());
        let vertex = service.ring().vertices()[0];
        assert_eq!(
            service.assess_point(&vertex),
            Ok(Assessment::Outside { distance_km: 0.0 })
        );
    }
}
