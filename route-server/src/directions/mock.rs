//! Mock directions provider for testing without API access.
//!
//! Serves a canned outcome, optionally loaded from a JSON file. Mocks built
//! in code record every parameter set they were asked about; file-backed
//! mocks run inside the long-lived server and keep no history.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::error::Rejection;
use super::params::ProviderParams;
use super::provider::DirectionsProvider;
use super::types::DirectionsPayload;

/// Mock directions provider that answers every call the same way.
///
/// Useful for development without Google credentials and for driving the
/// translator and web layer in tests.
#[derive(Debug, Clone)]
pub struct MockDirections {
    outcome: Result<DirectionsPayload, Rejection>,
    /// Parameters received so far, oldest first.
    calls: Arc<RwLock<Vec<ProviderParams>>>,
    record_calls: bool,
}

impl MockDirections {
    /// A mock that answers with the given payload.
    pub fn with_payload(payload: Value) -> Self {
        Self::with_outcome(Ok(DirectionsPayload::new(payload)))
    }

    /// A mock that rejects every call.
    pub fn rejecting(rejection: Rejection) -> Self {
        Self::with_outcome(Err(rejection))
    }

    pub fn with_outcome(outcome: Result<DirectionsPayload, Rejection>) -> Self {
        Self {
            outcome,
            calls: Arc::new(RwLock::new(Vec::new())),
            record_calls: true,
        }
    }

    /// Load a directions response body from a JSON file.
    ///
    /// The returned mock does not record calls.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Rejection> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| {
            Rejection::transport(format!("Failed to read mock directions file {path:?}: {e}"))
        })?;

        let payload: Value = serde_json::from_str(&json).map_err(|e| {
            Rejection::transport(format!("Failed to parse mock directions file {path:?}: {e}"))
        })?;

        Ok(Self {
            record_calls: false,
            ..Self::with_payload(payload)
        })
    }

    /// Parameters of every call made so far (always empty for file-backed mocks).
    pub async fn calls(&self) -> Vec<ProviderParams> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl DirectionsProvider for MockDirections {
    async fn directions(&self, params: &ProviderParams) -> Result<DirectionsPayload, Rejection> {
        if self.record_calls {
            self.calls.write().await.push(params.clone());
        }
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;
    use crate::directions::build_params;
    use crate::domain::{ApiKey, RouteRequest};

    fn params() -> ProviderParams {
        build_params(&RouteRequest::new(["A", "B"]), &ApiKey::new("k")).unwrap()
    }

    #[tokio::test]
    async fn serves_payload_and_records_calls() {
        let mock = MockDirections::with_payload(json!({"status": "OK", "routes": []}));

        let payload = mock.directions(&params()).await.unwrap();
        assert_eq!(payload.as_value()["status"], "OK");

        let calls = mock.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].origin(), "place_id:A");
    }

    #[tokio::test]
    async fn clones_share_call_log() {
        let mock = MockDirections::rejecting(Rejection::transport("down"));
        let clone = mock.clone();

        assert!(clone.directions(&params()).await.is_err());
        assert_eq!(mock.calls().await.len(), 1);
    }

    #[tokio::test]
    async fn loads_payload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"status": "OK", "routes": [{{"summary": "US-75"}}]}}"#).unwrap();

        let mock = MockDirections::from_file(file.path()).unwrap();
        let payload = mock.directions(&params()).await.unwrap();
        assert_eq!(payload.as_value()["routes"][0]["summary"], "US-75");
    }

    #[tokio::test]
    async fn bundled_fixture_is_an_ok_payload() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/directions_ok.json");
        let mock = MockDirections::from_file(path).unwrap();

        let payload = mock.directions(&params()).await.unwrap();
        assert_eq!(payload.status(), Some(crate::directions::DirectionsStatus::Ok));
    }

    #[tokio::test]
    async fn file_backed_mock_keeps_no_history() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"status": "OK", "routes": []}}"#).unwrap();
        let mock = MockDirections::from_file(file.path()).unwrap();

        for _ in 0..100 {
            mock.directions(&params()).await.unwrap();
        }

        assert!(mock.calls().await.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MockDirections::from_file(dir.path().join("nope.json"));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_json_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = MockDirections::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
