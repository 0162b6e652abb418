//! Weather record retrieval client

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::state::WeatherRecord;

/// Address of the local record service
pub const DEFAULT_SERVER: &str = "http://localhost:8000";

/// Shown when the server rejects a lookup without explaining why
pub const NOT_FOUND_MESSAGE: &str = "Weather data not found";

/// Shown when the request could not complete
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Could not connect to the server";

/// Error body returned by the server on non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    /// Server answered with a non-success status
    #[error("{0}")]
    Rejected(String),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("response parse error: {0}")]
    Decode(#[source] reqwest::Error),
}

impl LookupError {
    /// Message shown in the alert region. Transport causes are never surfaced.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::Rejected(message) => message.clone(),
            LookupError::Transport(_) | LookupError::Decode(_) => {
                NETWORK_ERROR_MESSAGE.to_string()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct LookupClient {
    client: Client,
    base_url: String,
}

impl LookupClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LookupError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn record_url(&self, id: &str) -> String {
        format!("{}/weather/{}", self.base_url, urlencoding::encode(id))
    }

    /// Retrieve the stored record for `id`
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_record(&self, id: &str) -> Result<WeatherRecord, LookupError> {
        let url = self.record_url(id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(LookupError::Transport)?;

        let status = response.status();
        debug!(%status, "lookup response");

        if status.is_success() {
            return response.json().await.map_err(LookupError::Decode);
        }

        let body = response.bytes().await.map_err(LookupError::Transport)?;
        let message = rejection_message(&body);
        warn!(%status, %message, "lookup rejected");
        Err(LookupError::Rejected(message))
    }
}

/// Pull `detail` out of an error body, falling back when the body is
/// empty, not JSON, or has no usable detail.
fn rejection_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string())
}
