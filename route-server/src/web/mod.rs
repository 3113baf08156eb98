//! Web layer for the route server.
//!
//! Parses request bodies, hands them to the translator and maps the result
//! or error onto an HTTP response.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
