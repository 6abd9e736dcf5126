//! HTTP API server.
//!
//! Two read-only endpoints built on Axum:
//!
//! - `GET /` reports service identity and health
//! - `GET /components` lists the component inventory
//!
//! Any other path gets a 404 with a small JSON error body. Other methods on
//! the two known paths get Axum's default 405.

mod handlers;

pub use handlers::{ErrorResponse, StatusResponse, SERVICE_NAME, SERVICE_VERSION, STATUS_OK};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::inventory::{Component, COMPONENTS};

/// Shared application state for API endpoints.
///
/// Holds only immutable data, so cloning it per request is a pointer copy
/// and no locking is needed.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Components served by `/components`
    pub components: &'static [Component],
}

impl AppState {
    /// State serving the given components.
    pub fn new(components: &'static [Component]) -> Self {
        Self { components }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(COMPONENTS)
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/components", get(handlers::list_components))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
