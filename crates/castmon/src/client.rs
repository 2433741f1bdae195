//! HTTP client for the device's local status endpoint.
//!
//! One GET per poll cycle, no retry here: the loop in `runtime` handles
//! re-attempts on the next tick.

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

/// Everything that can go wrong during one poll. All variants are
/// recoverable; the loop reports the message and keeps polling.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("device returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed JSON in response: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Client for a single device's eureka_info endpoint.
pub struct EurekaClient {
    http: reqwest::Client,
    url: String,
}

impl EurekaClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One GET against the endpoint: HTTP 2xx with a JSON body, or an error.
    pub async fn fetch(&self) -> Result<serde_json::Value, FetchError> {
        debug!("GET {}", self.url);

        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let doc = serde_json::from_str(&body)?;
        Ok(doc)
    }
}
