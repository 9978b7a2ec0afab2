//! Request guard
//!
//! Wraps every outbound GET with a deadline and classifies failures into
//! [`WeatherError`] variants. A single failed attempt is final.

use std::{
    error::Error as StdError,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::{config::WeatherConfig, error::WeatherError};

/// Timeout and error-translation wrapper around a shared HTTP client
///
/// Cloning is cheap; clones share the connection pool and the timer counter.
#[derive(Debug, Clone)]
pub struct RequestGuard {
    client: Client,
    timeout: Duration,
    armed_timers: Arc<AtomicUsize>,
}

impl RequestGuard {
    /// Create a guard with its own HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| WeatherError::Configuration(e.to_string()))?;

        Ok(Self::with_client(client, config.timeout()))
    }

    /// Create a guard around an existing client
    #[must_use]
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            armed_timers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The per-request deadline
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of deadlines currently armed across all clones
    ///
    /// Zero whenever no request is in flight.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.armed_timers.load(Ordering::SeqCst)
    }

    /// GET `url` and decode the JSON body
    ///
    /// The deadline covers connecting, the status line and reading the body.
    /// When it expires the in-flight request is dropped, which cancels it.
    ///
    /// # Errors
    ///
    /// - [`WeatherError::Timeout`] when the deadline expires
    /// - [`WeatherError::HttpStatus`] for any non-2xx status
    /// - [`WeatherError::Network`] for transport failures and unreadable bodies
    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, WeatherError> {
        let _lease = TimerLease::arm(&self.armed_timers);

        match tokio::time::timeout(self.timeout, self.send_and_decode(&url)).await {
            Ok(result) => result,
            Err(_elapsed) => {
                warn!(timeout_secs = self.timeout.as_secs(), "Request timed out");
                Err(self.timeout_error(&url))
            },
        }
    }

    async fn send_and_decode<T: DeserializeOwned>(&self, url: &Url) -> Result<T, WeatherError> {
        debug!("Sending request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Upstream returned error status");
            return Err(WeatherError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(url, &e))?;

        serde_json::from_slice(&body).map_err(|e| WeatherError::Network {
            url: url.to_string(),
            message: format!("invalid response body: {e}"),
        })
    }

    fn transport_error(&self, url: &Url, err: &reqwest::Error) -> WeatherError {
        if err.is_timeout() {
            return self.timeout_error(url);
        }
        WeatherError::Network {
            url: url.to_string(),
            message: error_chain(err),
        }
    }

    fn timeout_error(&self, url: &Url) -> WeatherError {
        WeatherError::Timeout {
            url: url.to_string(),
            timeout_secs: self.timeout.as_secs(),
        }
    }
}

/// Counts an armed deadline for as long as it is alive
///
/// Dropped on every exit path of `fetch_json`, including when the caller
/// drops the future itself.
struct TimerLease<'a>(&'a AtomicUsize);

impl<'a> TimerLease<'a> {
    fn arm(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for TimerLease<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Flatten an error and its sources into one message
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
