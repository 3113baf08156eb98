//! Application state for the web layer.

use std::sync::Arc;

use crate::translator::RouteTranslator;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Route translator with injected credentials
    pub translator: Arc<RouteTranslator>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(translator: RouteTranslator) -> Self {
        Self {
            translator: Arc::new(translator),
        }
    }
}
