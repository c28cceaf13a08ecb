//! HTTP routes

mod api;
mod badges;
mod error;

use axum::Router;

pub use error::AppError;

use crate::state::AppState;

/// Create main router with all routes
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        // Gallery, fragments and stylesheet
        .merge(badges::routes())
        // REST API routes
        .nest("/api/v1", api::routes())
        .fallback(not_found)
        .with_state(state)
}

/// 404 handler
async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
