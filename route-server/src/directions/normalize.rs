//! Classification of directions outcomes.

use crate::domain::RouteError;

use super::error::Rejection;
use super::types::{DirectionsPayload, DirectionsStatus, RouteResult};

/// Turn the outcome of one directions call into a route or a classified error.
///
/// - rejection with an upstream response: [`RouteError::ProviderRejection`]
/// - rejection without one: [`RouteError::Unknown`]
/// - `OK`: the payload, unchanged
/// - `ZERO_RESULTS`: [`RouteError::NoRoutesFound`]
/// - any other status, or none: [`RouteError::Unknown`]
pub fn normalize(outcome: Result<DirectionsPayload, Rejection>) -> Result<RouteResult, RouteError> {
    let payload = match outcome {
        Ok(payload) => payload,
        Err(rejection) => return Err(classify_rejection(rejection)),
    };

    match payload.status() {
        Some(DirectionsStatus::Ok) => Ok(payload),
        Some(DirectionsStatus::ZeroResults) => Err(RouteError::NoRoutesFound),
        Some(status) => Err(RouteError::Unknown(format!(
            "directions provider returned status {status}"
        ))),
        None => Err(RouteError::Unknown(
            "directions response has no status".to_string(),
        )),
    }
}

fn classify_rejection(rejection: Rejection) -> RouteError {
    match rejection.response {
        Some(response) => {
            let data = response.data.unwrap_or_default();
            RouteError::ProviderRejection {
                code: response.status,
                reason: data.status,
                message: data.error_message,
            }
        }
        None => RouteError::Unknown(rejection.description),
    }
}
