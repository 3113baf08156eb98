//! Google Directions HTTP client.
//!
//! Issues one GET per call against the JSON directions endpoint. The
//! provider reports most failures inside a 200 response via the `status`
//! field; those are turned into rejections here so that callers see the
//! same shape whether the failure came from HTTP or from the payload.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::error::{ProviderErrorBody, Rejection};
use super::params::ProviderParams;
use super::provider::DirectionsProvider;
use super::types::DirectionsPayload;

/// Default base URL for the Google Maps web services.
pub(crate) const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Path of the JSON directions endpoint.
const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// Base URL for the API (defaults to Google)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DirectionsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client for the Google Directions API.
///
/// Credentials travel in [`ProviderParams`], not in the client, so one
/// client can serve any key.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    url: String,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, Rejection> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: format!("{}{}", config.base_url.trim_end_matches('/'), DIRECTIONS_PATH),
        })
    }

    /// Full URL of the directions endpoint this client calls.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DirectionsProvider for DirectionsClient {
    async fn directions(&self, params: &ProviderParams) -> Result<DirectionsPayload, Rejection> {
        debug!(
            origin = params.origin(),
            destination = params.destination(),
            waypoints = params.waypoints().len(),
            alternatives = ?params.alternatives(),
            "requesting directions"
        );

        let response = self
            .http
            .get(&self.url)
            .query(&params.to_query())
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                warn!(error = %e, timeout = e.is_timeout(), "directions request failed");
                Rejection::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let data = serde_json::from_str::<ProviderErrorBody>(&body).ok();
            warn!(
                status = status.as_u16(),
                reason = data.as_ref().and_then(|d| d.status.as_deref()),
                "directions provider returned HTTP error"
            );
            return Err(Rejection::with_response(status.as_u16(), data));
        }

        let payload: DirectionsPayload = serde_json::from_str(&body).map_err(|e| {
            Rejection::transport(format!(
                "JSON parse error: {e} (body: {})",
                body.chars().take(200).collect::<String>()
            ))
        })?;

        // Provider error statuses come back as 200s; surface them as rejections.
        if let Some(provider_status) = payload.status() {
            if let Some(code) = provider_status.error_code() {
                warn!(status = %provider_status, code, "directions provider reported error");
                return Err(Rejection::with_response(
                    code,
                    Some(ProviderErrorBody {
                        status: Some(provider_status.as_str().to_string()),
                        error_message: payload.error_message().map(str::to_string),
                    }),
                ));
            }
            debug!(status = %provider_status, "directions response received");
        }

        Ok(payload)
    }
}
