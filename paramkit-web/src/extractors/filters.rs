use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::{ValidationError, WebError};

/// Typed filter parameters deserialized from the (snake_case) query string
///
/// Works like axum's [`Query`] but rejects malformed values with the same
/// validation error body used for paging and sorting parameters.
#[derive(Debug, Clone, Default)]
pub struct Filters<T>(pub T);

impl<T> Filters<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequestParts<S> for Filters<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(filters)) => Ok(Filters(filters)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected filter parameters");
                Err(WebError::validation(vec![ValidationError {
                    field: Some("query".to_string()),
                    message: rejection.body_text(),
                    code: "type_error.query".to_string(),
                }]))
            }
        }
    }
}
