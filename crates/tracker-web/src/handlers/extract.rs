//! Query extractor whose failures use the JSON error body

use super::api::ApiError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string that was deserialized and validated
///
/// Malformed query strings and validation failures are both rejected with
/// [`ApiError`], so clients always get a `400` JSON body.
#[derive(Debug, Clone, Default)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::from(tracker_core::Error::Validation {
                    field: "query".to_string(),
                    message: rejection.body_text(),
                })
            })?;

        value.validate()?;
        Ok(Self(value))
    }
}
