//! Route request translation.
//!
//! Ties the request builder, one provider call and the response normalizer
//! together. Holds no state besides the injected credentials and provider,
//! so concurrent calls never interact.

use std::fmt;
use std::sync::Arc;

use crate::directions::{DirectionsProvider, ProviderParams, RouteResult, build_params, normalize};
use crate::domain::{ApiKey, RouteError, RouteRequest};

/// Translates ordered stop lists into directions calls.
#[derive(Clone)]
pub struct RouteTranslator {
    credentials: ApiKey,
    provider: Arc<dyn DirectionsProvider>,
}

impl RouteTranslator {
    pub fn new(credentials: ApiKey, provider: Arc<dyn DirectionsProvider>) -> Self {
        Self {
            credentials,
            provider,
        }
    }

    /// Build the provider parameters for a request without calling out.
    pub fn build_params(&self, request: &RouteRequest) -> Result<ProviderParams, RouteError> {
        build_params(request, &self.credentials)
    }

    /// Fetch a route through the stops in `request`, in the given order.
    ///
    /// Invalid requests fail before the provider is contacted. The provider
    /// is called exactly once; nothing is retried.
    pub async fn fetch_routes(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        let params = self.build_params(request)?;
        let outcome = self.provider.directions(&params).await;
        normalize(outcome)
    }
}

impl fmt::Debug for RouteTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTranslator")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
