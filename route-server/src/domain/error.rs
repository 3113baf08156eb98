//! Route translation errors.
//!
//! Every failed call ends in exactly one of these. The web layer decides how
//! each kind is rendered to a client.

/// Classified outcome of a failed route request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The stop list cannot produce an origin and a destination
    #[error("invalid route request: {0}")]
    InvalidRequest(String),

    /// The provider found no route connecting the stops
    #[error("no routes found")]
    NoRoutesFound,

    /// The provider (or the transport to it) rejected the call
    #[error(
        "directions provider rejected request with status {code}{}{}",
        .reason.as_deref().map(|r| format!(" ({r})")).unwrap_or_default(),
        .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    ProviderRejection {
        /// Upstream HTTP-like status code
        code: u16,
        /// Machine-readable status from the provider payload
        reason: Option<String>,
        /// Human-readable message from the provider payload
        message: Option<String>,
    },

    /// Anything that does not fit the other kinds
    #[error("unknown directions error: {0}")]
    Unknown(String),
}

impl RouteError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RouteError::InvalidRequest(_) => "InvalidRequest",
            RouteError::NoRoutesFound => "NoRoutesFound",
            RouteError::ProviderRejection { .. } => "ProviderRejection",
            RouteError::Unknown(_) => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::InvalidRequest("need at least 2 stops, got 1".into());
        assert_eq!(
            err.to_string(),
            "invalid route request: need at least 2 stops, got 1"
        );

        let err = RouteError::NoRoutesFound;
        assert_eq!(err.to_string(), "no routes found");

        let err = RouteError::ProviderRejection {
            code: 403,
            reason: Some("INVALID_REQUEST".into()),
            message: Some("Dummy error message".into()),
        };
        assert_eq!(
            err.to_string(),
            "directions provider rejected request with status 403 (INVALID_REQUEST): Dummy error message"
        );

        let err = RouteError::ProviderRejection {
            code: 502,
            reason: None,
            message: None,
        };
        assert_eq!(
            err.to_string(),
            "directions provider rejected request with status 502"
        );

        let err = RouteError::Unknown("status SOMETHING_NEW".into());
        assert!(err.to_string().contains("SOMETHING_NEW"));
    }

    #[test]
    fn kinds_are_distinct() {
        assert_eq!(RouteError::NoRoutesFound.kind(), "NoRoutesFound");
        assert_eq!(RouteError::Unknown(String::new()).kind(), "Unknown");
        assert_ne!(
            RouteError::NoRoutesFound.kind(),
            RouteError::Unknown(String::new()).kind()
        );
    }
}
