//! Application state for the proxy server.

use anyhow::Result;
use reqwest::Client;
use weather_core::Config;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for upstream requests.
    pub http: Client,

    /// Upstream access credential, injected into every forwarded request.
    pub access_key: String,

    /// Upstream current-weather endpoint.
    pub upstream_url: String,
}

impl AppState {
    pub fn new(access_key: String, upstream_url: String) -> Self {
        Self { http: Client::new(), access_key, upstream_url }
    }

    /// Build state from loaded configuration. Errors when no access key is
    /// configured, with a hint on how to set one.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.resolved_access_key()?, config.upstream_url().to_string()))
    }
}
