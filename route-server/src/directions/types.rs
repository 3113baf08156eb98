//! Directions API response types.
//!
//! The response body is kept as raw JSON. Only the top-level `status` field
//! is ever looked at; routes, legs and geocoded waypoints are the caller's
//! business.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status codes reported in the `status` field of a directions response.
///
/// Matched verbatim against the provider's strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirectionsStatus {
    Ok,
    ZeroResults,
    NotFound,
    MaxWaypointsExceeded,
    MaxRouteLengthExceeded,
    InvalidRequest,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
    /// A status string this crate does not know about
    Other(String),
}

impl DirectionsStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "NOT_FOUND" => Self::NotFound,
            "MAX_WAYPOINTS_EXCEEDED" => Self::MaxWaypointsExceeded,
            "MAX_ROUTE_LENGTH_EXCEEDED" => Self::MaxRouteLengthExceeded,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "OVER_DAILY_LIMIT" => Self::OverDailyLimit,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "UNKNOWN_ERROR" => Self::UnknownError,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::NotFound => "NOT_FOUND",
            Self::MaxWaypointsExceeded => "MAX_WAYPOINTS_EXCEEDED",
            Self::MaxRouteLengthExceeded => "MAX_ROUTE_LENGTH_EXCEEDED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::OverDailyLimit => "OVER_DAILY_LIMIT",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(s) => s,
        }
    }

    /// HTTP-like status code for a provider-reported error status.
    ///
    /// Returns `None` for `OK`, `ZERO_RESULTS` and unrecognized statuses,
    /// which are left for the normalizer to classify.
    pub fn error_code(&self) -> Option<u16> {
        match self {
            Self::Ok | Self::ZeroResults | Self::Other(_) => None,
            Self::InvalidRequest => Some(400),
            Self::RequestDenied => Some(403),
            Self::NotFound => Some(404),
            Self::MaxWaypointsExceeded | Self::MaxRouteLengthExceeded => Some(413),
            Self::OverDailyLimit | Self::OverQueryLimit => Some(429),
            Self::UnknownError => Some(500),
        }
    }
}

impl fmt::Display for DirectionsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directions response body, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionsPayload(Value);

/// The success payload handed back to callers.
pub type RouteResult = DirectionsPayload;

impl DirectionsPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The top-level `status` field, if present and a string.
    pub fn status(&self) -> Option<DirectionsStatus> {
        self.0
            .get("status")
            .and_then(Value::as_str)
            .map(DirectionsStatus::parse)
    }

    /// The top-level `error_message` field, if present.
    pub fn error_message(&self) -> Option<&str> {
        self.0.get("error_message").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for DirectionsPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn status_parse_known_values() {
        assert_eq!(DirectionsStatus::parse("OK"), DirectionsStatus::Ok);
        assert_eq!(
            DirectionsStatus::parse("ZERO_RESULTS"),
            DirectionsStatus::ZeroResults
        );
        assert_eq!(
            DirectionsStatus::parse("REQUEST_DENIED"),
            DirectionsStatus::RequestDenied
        );
    }

    #[test]
    fn status_parse_is_case_sensitive() {
        assert_eq!(
            DirectionsStatus::parse("ok"),
            DirectionsStatus::Other("ok".into())
        );
    }

    #[test]
    fn status_as_str_matches_parse() {
        for s in [
            "OK",
            "ZERO_RESULTS",
            "NOT_FOUND",
            "MAX_WAYPOINTS_EXCEEDED",
            "MAX_ROUTE_LENGTH_EXCEEDED",
            "INVALID_REQUEST",
            "OVER_DAILY_LIMIT",
            "OVER_QUERY_LIMIT",
            "REQUEST_DENIED",
            "UNKNOWN_ERROR",
            "BRAND_NEW_STATUS",
        ] {
            assert_eq!(DirectionsStatus::parse(s).as_str(), s);
        }
    }

    #[test]
    fn error_codes() {
        assert_eq!(DirectionsStatus::Ok.error_code(), None);
        assert_eq!(DirectionsStatus::ZeroResults.error_code(), None);
        assert_eq!(DirectionsStatus::Other("X".into()).error_code(), None);
        assert_eq!(DirectionsStatus::InvalidRequest.error_code(), Some(400));
        assert_eq!(DirectionsStatus::RequestDenied.error_code(), Some(403));
        assert_eq!(DirectionsStatus::OverQueryLimit.error_code(), Some(429));
        assert_eq!(
            DirectionsStatus::MaxWaypointsExceeded.error_code(),
            Some(413)
        );
    }

    #[test]
    fn payload_status() {
        let payload = DirectionsPayload::new(json!({"status": "OK", "routes": []}));
        assert_eq!(payload.status(), Some(DirectionsStatus::Ok));

        let payload = DirectionsPayload::new(json!({"routes": []}));
        assert_eq!(payload.status(), None);

        let payload = DirectionsPayload::new(json!({"status": 7}));
        assert_eq!(payload.status(), None);
    }

    #[test]
    fn payload_serializes_verbatim() {
        let raw = json!({
            "geocoded_waypoints": [{"place_id": "A"}],
            "routes": [{"summary": "I-35"}],
            "status": "OK",
        });
        let payload = DirectionsPayload::new(raw.clone());
        assert_eq!(serde_json::to_value(&payload).unwrap(), raw);
    }
}
