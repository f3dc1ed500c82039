//! Page handlers for serving rendered HTML

use super::ViewQuery;
use crate::{
    pages::{PageContext, render_page},
    state::AppState,
};
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::{Html, IntoResponse},
};
use std::sync::Arc;
use tracing::{debug, warn};
use tracker_core::utils::format_clock;

/// Dashboard page; `tab`, `q` and `sort` select what is shown
///
/// An unparseable query string renders the default view.
pub async fn index(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ViewQuery>, QueryRejection>,
) -> Html<String> {
    let params = params.map_or_else(
        |rejection| {
            warn!("Ignoring malformed query string: {}", rejection.body_text());
            ViewQuery::default()
        },
        |Query(params)| params,
    );

    let mut session = state.new_session();
    params.apply_lenient(&mut session);

    let clock = format_clock(&chrono::Local::now());
    debug!(
        tab = %session.active_tab(),
        query = session.search_query(),
        sort = %session.sort_key(),
        "Rendering dashboard page"
    );

    let ctx = PageContext {
        config: &state.config.dashboard,
        dataset: &state.dataset,
        session: &session,
        clock: &clock,
    };
    Html(render_page(&ctx))
}

/// Stylesheet referenced by every page
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../templates/style.css"),
    )
}
