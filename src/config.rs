use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::boundary::RingRoad;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:5000";
pub const DEFAULT_GEOCODER_URL: &str = "https://geocode-maps.yandex.ru/1.x/";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub geocoder: GeocoderConfig,
    pub boundary: BoundaryConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeocoderConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BoundaryConfig {
    /// TOML ring to serve instead of the built-in MKAD
    pub file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GEOCODER_URL.to_string(),
            api_key: None,
            timeout_secs: 10,
            user_agent: concat!("ringroad/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl BoundaryConfig {
    /// The configured ring, or MKAD when none is set
    pub fn load(&self) -> Result<RingRoad> {
        match &self.file {
            Some(path) => RingRoad::load_from_file(path),
            None => Ok(RingRoad::mkad()),
        }
    }
}
