//! Google Directions API integration.
//!
//! This module owns both halves of the translation around a single
//! directions call:
//! - [`build_params`] turns a [`RouteRequest`](crate::domain::RouteRequest)
//!   into the provider's parameter set
//! - [`normalize`] turns whatever came back into a payload or a
//!   [`RouteError`](crate::domain::RouteError)
//!
//! The call itself goes through the [`DirectionsProvider`] trait, implemented
//! by [`DirectionsClient`] over HTTP and by [`MockDirections`] for tests and
//! offline development.

mod client;
mod error;
mod mock;
mod normalize;
mod params;
mod provider;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use error::{ProviderErrorBody, Rejection, RejectionResponse};
pub use mock::MockDirections;
pub use normalize::normalize;
pub use params::{ProviderParams, build_params};
pub use provider::DirectionsProvider;
pub use types::{DirectionsPayload, DirectionsStatus, RouteResult};
