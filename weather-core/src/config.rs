use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Env var that overrides the access key from the config file.
pub const ACCESS_KEY_ENV: &str = "WEATHERSTACK_ACCESS_KEY";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_UPSTREAM_URL: &str = "http://api.weatherstack.com/current";
const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:8080";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// access_key = "..."
/// listen_addr = "127.0.0.1:8080"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Weatherstack access key used by the proxy. Never forwarded to
    /// clients; the proxy injects it into upstream requests.
    pub access_key: Option<String>,

    /// Address the proxy listens on.
    pub listen_addr: Option<String>,

    /// Upstream current-weather endpoint.
    pub upstream_url: Option<String>,

    /// Proxy base URL the CLI talks to.
    pub proxy_url: Option<String>,
}

impl Config {
    /// Access key with env override, erroring with a configuration hint
    /// when neither source has one.
    pub fn resolved_access_key(&self) -> Result<String> {
        if let Ok(key) = env::var(ACCESS_KEY_ENV) {
            if !key.is_empty() {
                return Ok(key);
            }
        }

        self.access_key.clone().filter(|key| !key.is_empty()).ok_or_else(|| {
            anyhow!(
                "No weatherstack access key configured.\n\
                 Hint: run `weather configure` or set {ACCESS_KEY_ENV}."
            )
        })
    }

    pub fn set_access_key(&mut self, key: String) {
        self.access_key = Some(key);
    }

    pub fn listen_addr(&self) -> &str {
        self.listen_addr.as_deref().unwrap_or(DEFAULT_LISTEN_ADDR)
    }

    pub fn upstream_url(&self) -> &str {
        self.upstream_url.as_deref().unwrap_or(DEFAULT_UPSTREAM_URL)
    }

    pub fn proxy_url(&self) -> &str {
        self.proxy_url.as_deref().unwrap_or(DEFAULT_PROXY_URL)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
