//! HTTP server answering whether an address is inside the ring road.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ringroad::api;
use ringroad::config::Config;
use ringroad::geocoder::YandexGeocoder;
use ringroad::DistanceService;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Ring road distance server")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides the config file)
    #[arg(short, long)]
    listen: Option<String>,

    /// Yandex Geocoder API key (overrides the config file)
    #[arg(long, env = "YANDEX_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Boundary file to serve instead of MKAD (overrides the config file)
    #[arg(long)]
    boundary: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(api_key) = args.api_key {
        config.geocoder.api_key = Some(api_key);
    }
    if let Some(boundary) = args.boundary {
        config.boundary.file = Some(boundary);
    }

    info!("Ringroad Distance Server");

    let ring = config.boundary.load()?;
    info!("Serving boundary '{}' ({} vertices)", ring.name(), ring.len());

    let geocoder = YandexGeocoder::from_config(&config.geocoder)?;
    info!("Using geocoder at {}", config.geocoder.url);

    let service = Arc::new(DistanceService::new(Arc::new(geocoder), ring));
    let app = api::router(service);

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen))?;
    axum::serve(listener, app).await?;

    Ok(())
}
