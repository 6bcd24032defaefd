//! Route handlers for the proxy endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::{str::FromStr, sync::Arc};
use weather_core::Unit;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct MethodNotAllowedResponse {
    pub error: String,
}

/// GET /health - Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/weather/{location}/{unit} - Forward a current-weather request.
///
/// The location arrives percent-encoded in the path; axum decodes it before
/// it reaches us. Status and body from upstream are passed through verbatim;
/// the provider signals logical failure in-body, not via status, and that is
/// for the client to interpret.
pub async fn current_weather(
    State(state): State<Arc<AppState>>,
    Path((location, unit)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let unit = Unit::from_str(&unit).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    tracing::info!(%location, %unit, "forwarding current-weather request");

    let res = state
        .http
        .get(&state.upstream_url)
        .query(&[
            ("access_key", state.access_key.as_str()),
            ("query", location.as_str()),
            ("units", unit.as_str()),
        ])
        .send()
        .await?;

    let status =
        StatusCode::from_u16(res.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = res.bytes().await?;

    Ok((status, [(header::CONTENT_TYPE, "application/json")], body.to_vec()).into_response())
}

/// Fallback for unsupported methods on the weather route.
pub async fn method_not_allowed(method: Method) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MethodNotAllowedResponse { error: format!("{method} not allowed") }),
    )
}
