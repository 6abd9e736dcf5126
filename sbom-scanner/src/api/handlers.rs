//! Endpoint handlers and their response payloads.

use axum::{
    extract::{Json, State},
    http::{StatusCode, Uri},
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::inventory::Component;
use crate::tracing::prelude::*;

/// Service identifier reported by the status endpoint.
pub const SERVICE_NAME: &str = "sbom-scanner";

/// Health literal reported by the status endpoint.
pub const STATUS_OK: &str = "ok";

/// Version of this service, independent of any component's version.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Status response payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusResponse {
    /// Service identifier
    pub service: String,
    /// Operational health
    pub status: String,
    /// Service version
    pub version: String,
}

impl StatusResponse {
    /// The status this service always reports.
    pub fn current() -> Self {
        Self {
            service: SERVICE_NAME.to_owned(),
            status: STATUS_OK.to_owned(),
            version: SERVICE_VERSION.to_owned(),
        }
    }
}

/// API error response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Status endpoint handler.
///
/// # Example
/// ```bash
/// curl http://localhost:8080/
/// ```
pub(super) async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::current())
}

/// List components endpoint handler.
///
/// Returns every component in inventory order.
///
/// # Example
/// ```bash
/// curl http://localhost:8080/components
/// ```
pub(super) async fn list_components(State(state): State<AppState>) -> Json<&'static [Component]> {
    debug!(count = state.components.len(), "Listing components");
    Json(state.components)
}

/// Fallback for unrouted paths.
pub(super) async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    debug!(path = %uri.path(), "No route for path");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "not found".to_owned(),
        }),
    )
}
