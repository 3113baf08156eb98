//! Domain types for the route translator.
//!
//! Everything here is per-call and ephemeral: a request comes in, an error
//! or a payload goes out, nothing is kept.

mod credentials;
mod error;
mod place;
mod request;

pub use credentials::ApiKey;
pub use error::RouteError;
pub use place::PlaceId;
pub use request::RouteRequest;
