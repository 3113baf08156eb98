//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{RouteError, RouteRequest};

use super::dto::ErrorResponse;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/fetch", post(fetch_routes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fetch a driving route through an ordered list of stops.
///
/// The body is decoded by hand so that a malformed stop list is reported as
/// an invalid request rather than as a generic extractor rejection.
async fn fetch_routes(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, AppError> {
    let request: RouteRequest = serde_json::from_slice(&body)
        .map_err(|e| RouteError::InvalidRequest(format!("malformed request body: {e}")))?;

    let route = state.translator.fetch_routes(&request).await?;

    Ok(Json(route.into_inner()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Route(RouteError),
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        AppError::Route(e)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Route(RouteError::InvalidRequest(_)) => StatusCode::BAD_REQUEST,
            AppError::Route(RouteError::NoRoutesFound) => StatusCode::NOT_FOUND,
            AppError::Route(RouteError::ProviderRejection { .. }) => StatusCode::BAD_GATEWAY,
            AppError::Route(RouteError::Unknown(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let AppError::Route(err) = &self;

        if status.is_server_error() {
            error!(%status, kind = err.kind(), "{err}");
        } else {
            warn!(%status, kind = err.kind(), "{err}");
        }

        let body = Json(ErrorResponse::from_route_error(err));
        (status, body).into_response()
    }
}
