use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

use crate::middleware::OriginalQuery;

/// The raw query string in the client's naming convention
///
/// Prefers the query saved by the camelCase normalisation layer and falls back
/// to the request URI when that layer is not installed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientQuery(pub Option<String>);

impl ClientQuery {
    pub fn from_parts(parts: &Parts) -> Self {
        let query = match parts.extensions.get::<OriginalQuery>() {
            Some(OriginalQuery(original)) => Some(original.clone()),
            None => parts.uri.query().map(str::to_owned),
        };
        Self(query)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for ClientQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}
