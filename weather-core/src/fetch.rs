use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Error captured by a settled fetch cycle.
///
/// Variants carry rendered messages rather than source errors so that state
/// snapshots stay cheaply cloneable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to reach {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    fn transport(url: &Url, err: &reqwest::Error) -> Self {
        FetchError::Transport { url: url.to_string(), message: err.to_string() }
    }

    fn decode(url: &Url, err: &serde_json::Error) -> Self {
        FetchError::Decode { url: url.to_string(), message: err.to_string() }
    }
}

/// Observable state of a fetch cycle.
///
/// While `loading` is true, `data` and `error` are both `None`: starting a
/// cycle clears any prior result before the request goes out. Settling sets
/// `loading` to false and exactly one of `data` or `error`.
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    pub loading: bool,
    pub data: Option<T>,
    pub error: Option<FetchError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { loading: false, data: None, error: None }
    }
}

impl<T> FetchState<T> {
    pub fn is_settled(&self) -> bool {
        !self.loading && (self.data.is_some() || self.error.is_some())
    }

    fn begin(&mut self) {
        self.loading = true;
        self.data = None;
        self.error = None;
    }

    fn settle(&mut self, outcome: Result<T, FetchError>) {
        self.loading = false;
        match outcome {
            Ok(data) => self.data = Some(data),
            Err(error) => self.error = Some(error),
        }
    }
}

#[derive(Debug)]
struct Inner<T> {
    state: FetchState<T>,
    generation: u64,
}

/// One-shot JSON GET with shared, observable state.
///
/// Clones share the same state. Each `fetch` call runs exactly one request;
/// there is no caching or deduplication, a repeated URL fetches again. When
/// cycles overlap, a generation counter makes the newest cycle win: a
/// completion from a superseded cycle is discarded instead of overwriting
/// fresher state.
#[derive(Debug, Clone)]
pub struct Fetcher<T> {
    http: Client,
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Default for Fetcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fetcher<T> {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(http: Client) -> Self {
        Self {
            http,
            inner: Arc::new(Mutex::new(Inner { state: FetchState::default(), generation: 0 })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Fetcher<T>
where
    T: DeserializeOwned + Clone,
{
    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        self.lock().state.clone()
    }

    /// Run one fetch cycle against `url` and return the state after it
    /// settles. If a newer cycle started while this one was in flight, the
    /// result of this cycle is dropped and the newer state is returned.
    pub async fn fetch(&self, url: Url) -> FetchState<T> {
        let generation = {
            let mut inner = self.lock();
            inner.generation += 1;
            inner.state.begin();
            inner.generation
        };

        tracing::debug!(%url, generation, "starting fetch cycle");
        let outcome = self.perform(&url).await;

        let mut inner = self.lock();
        if inner.generation == generation {
            if let Err(error) = &outcome {
                tracing::debug!(%url, %error, "fetch cycle settled with error");
            }
            inner.state.settle(outcome);
        } else {
            tracing::debug!(%url, generation, "discarding stale fetch completion");
        }
        inner.state.clone()
    }

    async fn perform(&self, url: &Url) -> Result<T, FetchError> {
        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::transport(url, &e))?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = res.text().await.map_err(|e| FetchError::transport(url, &e))?;
        serde_json::from_str(&body).map_err(|e| FetchError::decode(url, &e))
    }
}
