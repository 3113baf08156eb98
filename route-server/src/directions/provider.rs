//! The outbound directions capability.

use async_trait::async_trait;

use super::error::Rejection;
use super::params::ProviderParams;
use super::types::DirectionsPayload;

/// Something that can answer a directions query.
///
/// Implementations make exactly one attempt per call. A returned payload may
/// still carry a non-`OK` status; classifying it is the normalizer's job.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn directions(&self, params: &ProviderParams) -> Result<DirectionsPayload, Rejection>;
}
