//! Failed directions calls.

use serde::{Deserialize, Serialize};

/// Error body the provider sends alongside a failing status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderErrorBody {
    /// Provider status code, e.g. `INVALID_REQUEST`
    #[serde(default)]
    pub status: Option<String>,

    /// Human-readable explanation, when the provider gives one
    #[serde(default)]
    pub error_message: Option<String>,
}

/// The upstream response attached to a rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionResponse {
    /// HTTP-like status code
    pub status: u16,

    /// Decoded error body, if the provider sent one
    pub data: Option<ProviderErrorBody>,
}

/// A directions call that did not produce a usable payload.
///
/// A rejection with a `response` came back from the provider; one without
/// never got a structured answer (connection refused, timeout, garbage
/// body).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{description}")]
pub struct Rejection {
    pub description: String,
    pub response: Option<RejectionResponse>,
}

impl Rejection {
    /// A rejection carrying an upstream status and body.
    pub fn with_response(status: u16, data: Option<ProviderErrorBody>) -> Self {
        let description = match data.as_ref().and_then(|d| d.status.as_deref()) {
            Some(reason) => format!("provider responded {status} ({reason})"),
            None => format!("provider responded {status}"),
        };
        Self {
            description,
            response: Some(RejectionResponse { status, data }),
        }
    }

    /// A rejection with no structured upstream response.
    pub fn transport(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            response: None,
        }
    }
}

impl From<reqwest::Error> for Rejection {
    /// The request URL carries the API key in its query, so it is dropped.
    fn from(err: reqwest::Error) -> Self {
        Rejection::transport(format!("HTTP error: {}", err.without_url()))
    }
}
