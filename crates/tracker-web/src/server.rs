//! Web server setup and configuration

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracker_core::Config;

/// Build the complete web application with all routes and state
///
/// # Errors
///
/// Returns an error if the configured dataset cannot be loaded.
pub fn build_app(config: Config) -> tracker_core::Result<Router> {
    let state = AppState::new(config)?;
    Ok(build_app_with_state(state))
}

/// Build the application around prepared state
pub fn build_app_with_state(state: AppState) -> Router {
    build_routes()
        .with_state(Arc::new(state))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
