//! Inbound route request.

use serde::{Deserialize, Serialize};

use super::PlaceId;

/// An ordered list of stops to route through, plus options.
///
/// The first stop is the origin, the last is the destination and everything
/// in between is a waypoint, visited in the given order. A missing
/// `orderedStops` field deserializes to an empty list, which the request
/// builder rejects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    #[serde(default)]
    pub ordered_stops: Vec<PlaceId>,

    /// Whether the provider should return alternative routes.
    ///
    /// `None` means the caller did not ask; the provider default applies.
    /// This is not the same as `Some(false)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_routes: Option<bool>,
}

impl RouteRequest {
    /// Create a request over the given stops with no alternatives preference.
    pub fn new<I, P>(stops: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PlaceId>,
    {
        Self {
            ordered_stops: stops.into_iter().map(Into::into).collect(),
            alternative_routes: None,
        }
    }

    /// Set the alternatives preference explicitly.
    pub fn with_alternative_routes(mut self, alternatives: bool) -> Self {
        self.alternative_routes = Some(alternatives);
        self
    }
}
