//! HolidayViz HTTP service.
//!
//! Reads the configuration file named by `HOLIDAYVIZ_CONFIG` (default
//! `./config/holidayviz.yaml`) and serves the holiday API.

use std::env;

use nz_holiday_engine::api::{AppState, create_router};
use nz_holiday_engine::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "./config/holidayviz.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = env::var("HOLIDAYVIZ_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path).inspect_err(|err| {
        error!(path = %config_path, error = %err, "Failed to load configuration");
    })?;

    let bind_addr = config.server().bind_addr.clone();
    let state = AppState::new(config)?;
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "HolidayViz listening");
    axum::serve(listener, router).await?;

    Ok(())
}
