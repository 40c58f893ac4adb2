//! Query key normalisation middleware
//!
//! Clients send `?pageSize=10&userID=42`; handlers bind `page_size` and
//! `user_id`. The layer rewrites the request URI before any extractor runs
//! and keeps the client's original query string in an [`OriginalQuery`]
//! extension so pagination links can be built with the client's names.

use http::{uri::PathAndQuery, Request, Uri};
use paramkit_core::normalize_incoming_query;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Query string exactly as the client sent it, before key normalisation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalQuery(pub String);

/// Layer that rewrites camelCase query keys to snake_case
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseQueryLayer;

impl<S> Layer<S> for CamelCaseQueryLayer {
    type Service = CamelCaseQuery<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CamelCaseQuery { inner }
    }
}

/// Service produced by [`CamelCaseQueryLayer`]
#[derive(Debug, Clone)]
pub struct CamelCaseQuery<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for CamelCaseQuery<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        normalize_request_query(&mut request);
        self.inner.call(request)
    }
}

/// Create the query key normalisation layer
pub fn camel_case_query_layer() -> CamelCaseQueryLayer {
    CamelCaseQueryLayer
}

fn normalize_request_query<B>(request: &mut Request<B>) {
    let Some(original) = request.uri().query().map(str::to_owned) else {
        return;
    };

    let normalized = normalize_incoming_query(&original);
    let path = request.uri().path();
    let path_and_query = if normalized.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, normalized)
    };

    match rebuild_uri(request.uri(), path_and_query) {
        Ok(uri) => {
            tracing::trace!(original = %original, normalized = %normalized, "Normalized query keys");
            *request.uri_mut() = uri;
        }
        Err(error) => {
            tracing::warn!(%error, "Leaving query string untouched, rewritten URI is invalid");
        }
    }

    request.extensions_mut().insert(OriginalQuery(original));
}

fn rebuild_uri(uri: &Uri, path_and_query: String) -> Result<Uri, http::Error> {
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query)?);
    Ok(Uri::from_parts(parts)?)
}
