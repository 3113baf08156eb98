//! Directions request parameters.
//!
//! [`build_params`] is the only way to get a [`ProviderParams`], so a value
//! of that type always has an origin, a destination and credentials.

use crate::domain::{ApiKey, RouteRequest, RouteError};

/// Separator the provider expects between waypoints in the query string.
const WAYPOINT_SEPARATOR: &str = "|";

/// Parameters for a single directions call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderParams {
    origin: String,
    destination: String,
    waypoints: Vec<String>,
    key: ApiKey,
    alternatives: Option<bool>,
}

impl ProviderParams {
    /// Reference to the first stop.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Reference to the last stop.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// References to the intermediate stops, in visit order.
    pub fn waypoints(&self) -> &[String] {
        &self.waypoints
    }

    pub fn key(&self) -> &ApiKey {
        &self.key
    }

    /// `None` when the caller expressed no preference.
    pub fn alternatives(&self) -> Option<bool> {
        self.alternatives
    }

    /// Encode as query pairs for the directions endpoint.
    ///
    /// `waypoints` is omitted when empty and `alternatives` when absent, so
    /// the provider's own defaults apply.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
        ];
        if !self.waypoints.is_empty() {
            query.push(("waypoints", self.waypoints.join(WAYPOINT_SEPARATOR)));
        }
        if let Some(alternatives) = self.alternatives {
            query.push(("alternatives", alternatives.to_string()));
        }
        query.push(("key", self.key.as_str().to_string()));
        query
    }
}

/// Build provider parameters from an ordered stop list.
///
/// The first stop becomes the origin, the last the destination, and every
/// stop in between a waypoint in the original order. Stops are never
/// reordered. Fails with [`RouteError::InvalidRequest`] when fewer than two
/// stops are given.
pub fn build_params(request: &RouteRequest, credentials: &ApiKey) -> Result<ProviderParams, RouteError> {
    let stops = &request.ordered_stops;

    let [first, middle @ .., last] = stops.as_slice() else {
        return Err(RouteError::InvalidRequest(format!(
            "orderedStops needs an origin and a destination, got {} stop(s)",
            stops.len()
        )));
    };

    Ok(ProviderParams {
        origin: first.reference(),
        destination: last.reference(),
        waypoints: middle.iter().map(|stop| stop.reference()).collect(),
        key: credentials.clone(),
        alternatives: request.alternative_routes,
    })
}
