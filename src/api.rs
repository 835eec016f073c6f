//! HTTP API for the distance service.
//!
//! `POST /distance-calc` with `{"address": "..."}` answers
//! `{"adress_inside_MKAD": 1}` for addresses inside the ring and
//! `{"adress_inside_MKAD": 0, "distance": "<km>"}` otherwise. Failures are
//! `{"error": "..."}` with status 400 or 500.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::geocoder::GeocodeError;
use crate::service::{Assessment, DistanceService, ServiceError};

pub const MISSING_ADDRESS: &str = "The address field was not found";
pub const ADDRESS_NOT_FOUND: &str = "Couldn't find such address in Yandex API";
pub const GEOCODER_UNAVAILABLE: &str = "The Yandex API is unavailable";

/// Build the application router
pub fn router(service: Arc<DistanceService>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/distance-calc",
            get(distance_query_handler).post(distance_handler),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct DistanceRequest {
    #[serde(default)]
    address: Option<String>,
}

#[derive(Debug, Serialize)]
struct DistanceResponse {
    /// Key spelling is part of the public contract
    #[serde(rename = "adress_inside_MKAD")]
    inside: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<String>,
}

impl From<Assessment> for DistanceResponse {
    fn from(assessment: Assessment) -> Self {
        match assessment {
            Assessment::Inside => Self {
                inside: 1,
                distance: None,
            },
            Assessment::Outside { distance_km } => Self {
                inside: 0,
                distance: Some(format!("{:.3}", distance_km)),
            },
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    boundary: String,
    vertices: usize,
}

/// Error body returned to clients
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn missing_address() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: MISSING_ADDRESS.to_string(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::EmptyAddress => Self::missing_address(),
            ServiceError::Geocode(GeocodeError::NotFound(_)) => Self {
                status: StatusCode::BAD_REQUEST,
                message: ADDRESS_NOT_FOUND.to_string(),
            },
            ServiceError::Geocode(GeocodeError::Unavailable(reason)) => {
                error!("Geocoder unavailable: {}", reason);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: GEOCODER_UNAVAILABLE.to_string(),
                }
            }
            ServiceError::Geometry(e) => {
                error!("Distance computation failed: {}", e);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Failed to compute distance: {}", e),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Health check endpoint
async fn health_handler(State(service): State<Arc<DistanceService>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        boundary: service.ring().name().to_string(),
        vertices: service.ring().len(),
    })
}

async fn distance_handler(
    State(service): State<Arc<DistanceService>>,
    body: Result<Json<DistanceRequest>, JsonRejection>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let request = body.map(|Json(r)| r).map_err(|e| {
        warn!("Rejected distance request body: {}", e);
        ApiError::missing_address()
    })?;
    assess(&service, request).await
}

async fn distance_query_handler(
    State(service): State<Arc<DistanceService>>,
    params: Result<Query<DistanceRequest>, QueryRejection>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let request = params.map(|Query(r)| r).map_err(|e| {
        warn!("Rejected distance query: {}", e);
        ApiError::missing_address()
    })?;
    assess(&service, request).await
}

async fn assess(
    service: &DistanceService,
    request: DistanceRequest,
) -> Result<Json<DistanceResponse>, ApiError> {
    let address = request.address.ok_or_else(ApiError::missing_address)?;
    let assessment = service.assess(&address).await?;
    Ok(Json(assessment.into()))
}
