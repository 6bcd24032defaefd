use reqwest::Url;
use thiserror::Error;

use crate::{
    fetch::{FetchError, FetchState, Fetcher},
    model::{CurrentWeather, Unit, WeatherReport},
};

/// Error surfaced by a settled weather cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The provider answered, but reported a logical failure in-body. The
    /// message is the provider's human-readable `error.info`.
    #[error("{0}")]
    Provider(String),

    /// The request itself failed (transport, status, decode).
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Weather state as consumed by views: the raw payload reclassified into
/// either data or an error.
#[derive(Debug, Clone)]
pub struct WeatherState {
    pub loading: bool,
    pub data: Option<CurrentWeather>,
    pub error: Option<WeatherError>,
}

impl WeatherState {
    pub fn is_settled(&self) -> bool {
        !self.loading && (self.data.is_some() || self.error.is_some())
    }
}

/// Client for current weather at a fixed location, fetched through the
/// proxy endpoint.
///
/// The request URL is derived from `(location, unit)`; changing the unit
/// changes the URL and starts a new fetch cycle. The unit is the only
/// mutation callers get.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: Url,
    location: String,
    unit: Unit,
    fetcher: Fetcher<WeatherReport>,
}

impl WeatherClient {
    /// `base_url` is the proxy root, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: Url, location: impl Into<String>, unit: Unit) -> anyhow::Result<Self> {
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Proxy base URL '{base_url}' cannot carry a path");
        }

        Ok(Self { base_url, location: location.into(), unit, fetcher: Fetcher::new() })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// URL of the proxy endpoint for the current `(location, unit)` pair.
    /// The location lands percent-encoded in the path.
    pub fn request_url(&self) -> Url {
        let mut url = self.base_url.clone();
        // Base URL was checked in `new`, so path segments are available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "api",
                "weather",
                self.location.as_str(),
                self.unit.as_str(),
            ]);
        }
        url
    }

    /// Current state without issuing a request.
    pub fn state(&self) -> WeatherState {
        classify(self.fetcher.state())
    }

    /// Run one fetch cycle for the current request URL.
    pub async fn refresh(&self) -> WeatherState {
        classify(self.fetcher.fetch(self.request_url()).await)
    }

    /// Switch to `unit`. A changed unit means a new request URL, so a new
    /// cycle starts; setting the unit already in effect fetches nothing.
    pub async fn set_unit(&mut self, unit: Unit) -> WeatherState {
        if unit == self.unit {
            return self.state();
        }
        self.unit = unit;
        self.refresh().await
    }

    /// Flip metric/imperial and start a new cycle.
    pub async fn toggle_unit(&mut self) -> WeatherState {
        self.unit = self.unit.toggled();
        self.refresh().await
    }
}

/// Reclassify the raw fetch state: a logical-failure payload becomes an
/// error carrying the provider's message, a success payload passes through
/// as data, and transport-level errors are forwarded untouched.
fn classify(raw: FetchState<WeatherReport>) -> WeatherState {
    let mut state = WeatherState {
        loading: raw.loading,
        data: None,
        error: raw.error.map(WeatherError::from),
    };

    match raw.data {
        Some(WeatherReport::Current(weather)) => state.data = Some(weather),
        Some(WeatherReport::Failure(failure)) => {
            state.error = Some(WeatherError::Provider(failure.error.info));
        }
        None => {}
    }

    state
}
