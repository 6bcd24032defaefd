//! Core library for the weather widget.
//!
//! This crate defines:
//! - The fetch primitive: one-shot JSON GET with observable loading/data/error state
//! - The weather client: request derivation from (location, unit) and payload reclassification
//! - View composition: loading/error/data sections rendered from shared state
//! - Configuration & credentials handling
//!
//! It is used by `weather-proxy` and `weather-cli`, but can also be reused
//! by other binaries or services.

pub mod client;
pub mod config;
pub mod fetch;
pub mod model;
pub mod render;

#[cfg(test)]
pub(crate) mod testdata;

pub use client::{WeatherClient, WeatherError, WeatherState};
pub use reqwest::Url;
pub use config::Config;
pub use fetch::{FetchError, FetchState, Fetcher};
pub use model::{CurrentWeather, ProviderFailure, Unit, WeatherReport};
pub use render::{Section, ViewError, WeatherView};
