//! JSON endpoints exposing the dashboard view model

use super::{ViewQuery, extract::ValidatedQuery};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};
use tracker_core::{Player, SortKey, Tab, TabLayout, encode, types::SummaryCounts};
use validator::Validate;

/// Longest text accepted by the encode endpoint, in characters
pub const MAX_ENCODE_CHARS: u64 = 256;

/// Error body returned by the JSON endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short error category
    pub error: String,
    /// Human readable detail
    pub message: String,
}

/// Error wrapper mapping core errors onto HTTP responses
#[derive(Debug)]
pub struct ApiError(tracker_core::Error);

impl From<tracker_core::Error> for ApiError {
    fn from(err: tracker_core::Error) -> Self {
        Self(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self(errors.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, category) = match &self.0 {
            tracker_core::Error::Validation { .. } | tracker_core::Error::UnknownTab { .. } => {
                warn!("Rejected request: {}", self.0);
                (StatusCode::BAD_REQUEST, "invalid_request")
            }
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let body = ErrorBody {
            error: category.to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Player list response
#[derive(Debug, Serialize)]
pub struct PlayersResponse<'a> {
    /// Query that was applied
    pub query: String,
    /// Sort key that was selected
    pub sort: SortKey,
    /// Number of players returned
    pub count: usize,
    /// Matching players in dataset order
    pub players: Vec<&'a Player>,
}

/// Filtered player list; unknown sort keys and overlong queries are rejected
///
/// # Errors
///
/// Returns `400 Bad Request` for invalid query parameters.
pub async fn players(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(params): ValidatedQuery<ViewQuery>,
) -> Result<Response, ApiError> {
    let mut session = state.new_session();
    if let Some(raw) = params.sort.as_deref().filter(|raw| !raw.is_empty()) {
        session.set_sort_key(raw.parse()?);
    }
    session.set_search_query(params.q.as_deref().unwrap_or_default().trim());

    let view = session.player_view(&state.dataset);
    let response = PlayersResponse {
        count: view.len(),
        query: view.query,
        sort: view.sort_key,
        players: view.players,
    };
    Ok(Json(response).into_response())
}

/// Summary card counters
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<SummaryCounts> {
    Json(state.dataset.summary())
}

/// Query parameters for the encode endpoint
#[derive(Debug, Deserialize, Validate)]
pub struct EncodeQuery {
    /// Text to encode
    #[validate(length(max = MAX_ENCODE_CHARS))]
    pub text: String,
}

/// Encode response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncodeResponse {
    /// Text as received
    pub input: String,
    /// Shifted text
    pub encoded: String,
}

/// Apply the character-shift encoder to `text`
///
/// # Errors
///
/// Returns `400 Bad Request` when `text` is missing or exceeds [`MAX_ENCODE_CHARS`].
pub async fn encode_text(
    ValidatedQuery(params): ValidatedQuery<EncodeQuery>,
) -> Result<Json<EncodeResponse>, ApiError> {
    let encoded = encode(&params.text);
    Ok(Json(EncodeResponse {
        input: params.text,
        encoded,
    }))
}

/// Tab layout response
#[derive(Debug, Serialize, Deserialize)]
pub struct TabsResponse {
    /// Configured layout
    pub layout: TabLayout,
    /// Tabs in display order
    pub tabs: Vec<Tab>,
    /// Tab shown when none is selected
    pub default: Tab,
}

/// Tabs offered by this deployment
pub async fn tabs(State(state): State<Arc<AppState>>) -> Json<TabsResponse> {
    let layout = state.config.dashboard.tab_layout;
    Json(TabsResponse {
        layout,
        tabs: layout.tabs().to_vec(),
        default: Tab::default(),
    })
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let err = ApiError::from(tracker_core::Error::Validation {
            field: "sort".to_string(),
            message: "unknown sort key 'size'".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_tab_maps_to_bad_request() {
        let err = ApiError::from(tracker_core::Error::UnknownTab {
            tab: "camera".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_map_to_internal_error() {
        let err = ApiError::from(tracker_core::Error::Dataset("broken".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_encode_text_handler() {
        let Json(response) = encode_text(ValidatedQuery(EncodeQuery {
            text: "all due in time, andre".to_string(),
        }))
        .await
        .unwrap();

        assert_eq!(response.encoded, "bmm evf jo ujnf- boesf");
        assert_eq!(response.input, "all due in time, andre");
    }

    #[test]
    fn test_encode_query_length_limit() {
        let at_limit = EncodeQuery {
            text: "a".repeat(256),
        };
        let over_limit = EncodeQuery {
            text: "a".repeat(257),
        };

        assert!(at_limit.validate().is_ok());
        assert!(over_limit.validate().is_err());
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "OK");
    }
}
