//! HTML routes - gallery page and badge fragments

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use dashbadge_core::{Role, Status};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::AppError;
use crate::state::AppState;
use crate::ui::{render, theme::ThemeMode, theme::GLOBAL_CSS};

/// Create HTML router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery_page))
        .route("/badges/role/{role}", get(role_badge))
        .route("/badges/status/{status}", get(status_badge))
        .route("/assets/theme.css", get(theme_css))
}

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub theme: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoleBadgeQuery {
    pub show_label: Option<bool>,
    pub class: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusBadgeQuery {
    pub text: Option<String>,
    pub class: Option<String>,
}

/// Gallery page handler
#[instrument(skip(state))]
async fn gallery_page(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Html<String>, AppError> {
    let theme = match query.theme.as_deref() {
        Some(value) => value
            .parse::<ThemeMode>()
            .map_err(|e| AppError::ValidationError(e.to_string()))?,
        None => state.config.theme,
    };

    Ok(Html(render::render_gallery(
        &state.config.title,
        theme,
        state.config.show_labels,
    )))
}

/// Role badge fragment handler
#[instrument(skip(state))]
async fn role_badge(
    State(state): State<AppState>,
    Path(role): Path<String>,
    Query(query): Query<RoleBadgeQuery>,
) -> Result<Html<String>, AppError> {
    let role: Role = role.parse()?;
    let show_label = query.show_label.unwrap_or(state.config.show_labels);

    debug!(%role, show_label, "Rendering role badge");
    Ok(Html(render::render_role_badge(
        role,
        show_label,
        query.class.as_deref().unwrap_or_default(),
    )))
}

/// Status badge fragment handler
#[instrument]
async fn status_badge(
    Path(status): Path<String>,
    Query(query): Query<StatusBadgeQuery>,
) -> Result<Html<String>, AppError> {
    let status: Status = status.parse()?;
    let text = query.text.as_deref().unwrap_or(status.label());

    debug!(%status, "Rendering status badge");
    Ok(Html(render::render_status_badge(
        status,
        text,
        query.class.as_deref().unwrap_or_default(),
    )))
}

/// Stylesheet handler
async fn theme_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], GLOBAL_CSS)
}
