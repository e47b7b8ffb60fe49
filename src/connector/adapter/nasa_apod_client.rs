use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::application::ApodService;
use crate::domain::DomainError;

const DEFAULT_BASE_URL: &str = "https://api.nasa.gov";
const APOD_PATH: &str = "/planetary/apod";
/// Environment variable holding the NASA API key.
const KEY_VAR: &str = "NASA_API_KEY";

/// HTTP client for the NASA Astronomy Picture of the Day API.
///
/// The API key is resolved from the environment on every call, never cached,
/// so configuration changes between requests are honored. A missing key fails
/// before any network I/O.
///
/// **Base URL**: defaults to `https://api.nasa.gov`. Override with
/// `NASA_BASE_URL` to target a local proxy or test server.
pub struct NasaApodClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + APOD_PATH).
    url: String,
    /// Name of the environment variable holding the credential.
    key_var: String,
}

impl NasaApodClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{APOD_PATH}", base.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            url,
            key_var: KEY_VAR.to_string(),
        }
    }

    /// Construct from environment variables:
    /// - `NASA_BASE_URL` - optional; defaults to `https://api.nasa.gov`
    pub fn from_env(timeout: Duration) -> Self {
        let base =
            std::env::var("NASA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base, timeout)
    }

    /// Override the credential variable name. Used by tests to isolate
    /// process-global environment state.
    pub fn with_key_var(mut self, var: impl Into<String>) -> Self {
        self.key_var = var.into();
        self
    }
}

#[async_trait]
impl ApodService for NasaApodClient {
    async fn fetch_picture_of_day(&self) -> Result<serde_json::Value, DomainError> {
        // Request-time lookup: a missing key must fail before any network call.
        let api_key = std::env::var(&self.key_var)
            .map_err(|_| DomainError::missing_credential(&self.key_var))?;

        let response = self
            .client
            .get(&self.url)
            .query(&[("api_key", api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!("NasaApodClient: request failed: {e}");
                DomainError::unreachable(format!("Could not connect to NASA API: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("NasaApodClient: API returned {status}: {body}");
            return Err(DomainError::upstream_status(
                status.as_u16(),
                format!("Error fetching data from NASA: {status} {body}"),
            ));
        }

        // Opaque passthrough: the document is forwarded without interpreting
        // its fields.
        response.json::<serde_json::Value>().await.map_err(|e| {
            warn!("NasaApodClient: failed to decode response: {e}");
            DomainError::upstream_status(502, format!("NASA returned a malformed response: {e}"))
        })
    }
}
