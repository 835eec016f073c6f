//! Yandex Geocoder HTTP API client.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::{GeocodeError, Geocoder};
use crate::config::GeocoderConfig;
use crate::geo::GeoPoint;

/// Geocoder backed by `geocode-maps.yandex.ru`
pub struct YandexGeocoder {
    client: Client,
    base_url: Url,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct YandexResponse {
    response: YandexBody,
}

#[derive(Debug, Deserialize)]
struct YandexBody {
    #[serde(rename = "GeoObjectCollection")]
    collection: GeoObjectCollection,
}

#[derive(Debug, Deserialize)]
struct GeoObjectCollection {
    #[serde(rename = "featureMember", default)]
    members: Vec<FeatureMember>,
}

#[derive(Debug, Deserialize)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    geo_object: GeoObject,
}

#[derive(Debug, Deserialize)]
struct GeoObject {
    #[serde(rename = "Point")]
    point: YandexPoint,
}

#[derive(Debug, Deserialize)]
struct YandexPoint {
    /// "lon lat", space separated
    pos: String,
}

impl YandexGeocoder {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid geocoder URL '{}'", base_url))?;
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Build a client from configuration; an API key is required
    pub fn from_config(config: &GeocoderConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .context("Yandex geocoder API key is not configured")?;

        Self::new(
            &config.url,
            api_key,
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }

    fn request_url(&self, address: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("geocode", address)
            .append_pair("format", "json")
            .append_pair("results", "1");
        url
    }
}

#[async_trait]
impl Geocoder for YandexGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        debug!("Geocoding '{}' via {}", address, self.base_url);

        let response = self
            .client
            .get(self.request_url(address))
            .send()
            .await
            .map_err(|e| {
                warn!("Yandex geocoder request failed: {}", e);
                GeocodeError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Yandex geocoder answered with status {}: {:?}",
                status,
                response.text().await.ok()
            );
            return Err(GeocodeError::Unavailable(format!("status {}", status)));
        }

        let data: YandexResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse Yandex geocoder response: {}", e);
            GeocodeError::Unavailable(e.to_string())
        })?;

        let point = first_point(&data).ok_or_else(|| GeocodeError::NotFound(address.to_string()))?;
        debug!("Geocoded '{}' to {}", address, point);
        Ok(point)
    }
}

fn first_point(data: &YandexResponse) -> Option<GeoPoint> {
    let member = data.response.collection.members.first()?;
    parse_pos(&member.geo_object.point.pos)
}

/// Parse a Yandex "lon lat" position
fn parse_pos(pos: &str) -> Option<GeoPoint> {
    let mut parts = pos.split_whitespace().map(str::parse::<f64>);
    let lon = parts.next()?.ok()?;
    let lat = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    GeoPoint::try_new(lat, lon).ok()
}
