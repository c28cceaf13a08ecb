//! REST API v1 endpoints
//!
//! ```text
//! /api/v1/
//! ├── health      GET     Health check
//! ├── roles       GET     Role display configuration
//! └── statuses    GET     Status style classes
//! ```

use axum::{response::IntoResponse, routing::get, Json, Router};
use dashbadge_core::{role_entries, status_entries};
use serde_json::json;
use tracing::{debug, instrument};

use crate::state::AppState;

/// Create the v1 API router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/roles", get(list_roles))
        .route("/statuses", get(list_statuses))
}

/// Health check endpoint
///
/// ## Response
/// ```json
/// {
///   "status": "ok",
///   "service": "dashbadge",
///   "version": "0.1.0"
/// }
/// ```
#[instrument]
async fn health_check() -> impl IntoResponse {
    debug!("Health check requested");
    Json(json!({
        "status": "ok",
        "service": "dashbadge",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Every role with its label, icon and style class
async fn list_roles() -> impl IntoResponse {
    Json(role_entries())
}

/// Every status with its style class
async fn list_statuses() -> impl IntoResponse {
    Json(status_entries())
}
