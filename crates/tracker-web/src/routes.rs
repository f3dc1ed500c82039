//! Route definitions for the web interface

use crate::{
    handlers::{api, pages},
    pages::STYLESHEET_PATH,
    state::AppState,
};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/", get(pages::index))
        .route(STYLESHEET_PATH, get(pages::stylesheet))
        // JSON API routes
        .route("/api/players", get(api::players))
        .route("/api/summary", get(api::summary))
        .route("/api/encode", get(api::encode_text))
        .route("/api/tabs", get(api::tabs))
        // Health check
        .route("/health", get(api::health_check))
}
