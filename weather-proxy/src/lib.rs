//! weather-proxy: thin server-side proxy for the weather widget.
//!
//! Exposes:
//! - GET /health                          - Health check
//! - GET /api/weather/{location}/{unit}   - Forwarded to the upstream provider
//!
//! The proxy's only job is to keep the upstream access credential out of
//! clients: it injects the key, forwards the request, and passes the
//! upstream status and JSON body through verbatim. Logical provider
//! failures (HTTP 200 with `success: false`) are not interpreted here.

pub mod error;
pub mod handlers;
pub mod state;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/weather/:location/:unit",
            get(handlers::current_weather).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
