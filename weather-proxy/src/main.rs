//! weather-proxy: binary entry point.
//!
//! Loads configuration, wires up the router, and starts the HTTP server.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_core::Config;
use weather_proxy::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_proxy=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let state = Arc::new(AppState::from_config(&config)?);
    let app = create_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Proxy listening on http://{addr}");
    tracing::info!("Endpoints:");
    tracing::info!("  GET /health                        - Health check");
    tracing::info!("  GET /api/weather/{{location}}/{{unit}} - Current weather (unit: m or f)");

    axum::serve(listener, app).await?;

    Ok(())
}
