//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::RouteError;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description
    pub error: String,

    /// Error kind (`InvalidRequest`, `NoRoutesFound`, ...)
    pub kind: &'static str,

    /// Status code reported by the directions provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,

    /// Status reason reported by the directions provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_reason: Option<String>,

    /// Message reported by the directions provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_message: Option<String>,
}

impl ErrorResponse {
    /// Build the body for a route error, keeping any upstream detail.
    pub fn from_route_error(err: &RouteError) -> Self {
        let (upstream_status, upstream_reason, upstream_message) = match err {
            RouteError::ProviderRejection {
                code,
                reason,
                message,
            } => (Some(*code), reason.clone(), message.clone()),
            _ => (None, None, None),
        };

        Self {
            error: err.to_string(),
            kind: err.kind(),
            upstream_status,
            upstream_reason,
            upstream_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rejection_body_carries_upstream_detail() {
        let err = RouteError::ProviderRejection {
            code: 403,
            reason: Some("REQUEST_DENIED".into()),
            message: Some("The provided API key is invalid.".into()),
        };

        let body = serde_json::to_value(ErrorResponse::from_route_error(&err)).unwrap();
        assert_eq!(body["kind"], "ProviderRejection");
        assert_eq!(body["upstream_status"], 403);
        assert_eq!(body["upstream_reason"], "REQUEST_DENIED");
        assert_eq!(body["upstream_message"], "The provided API key is invalid.");
    }

    #[test]
    fn other_kinds_omit_upstream_fields() {
        let body = serde_json::to_value(ErrorResponse::from_route_error(&RouteError::NoRoutesFound))
            .unwrap();
        assert_eq!(
            body,
            json!({"error": "no routes found", "kind": "NoRoutesFound"})
        );
    }
}
