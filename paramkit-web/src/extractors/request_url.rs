use axum::{
    extract::OriginalUri,
    http::{header::HOST, request::Parts},
};
use url::Url;

/// Forwarded scheme header set by reverse proxies
pub const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

/// Scheme for generated links when the request does not reveal one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkScheme(pub String);

impl Default for LinkScheme {
    fn default() -> Self {
        Self("http".to_string())
    }
}

/// Reconstruct the absolute URL the client requested, with `query` as its query string.
///
/// Returns `None` when no host is known, in which case no page links can be built.
pub fn request_url(parts: &Parts, query: Option<&str>) -> Option<Url> {
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri)
        .unwrap_or(&parts.uri);

    let host = parts
        .headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))?;

    let scheme = parts
        .headers
        .get(FORWARDED_PROTO_HEADER)
        .and_then(|value| value.to_str().ok())
        .or_else(|| parts.extensions.get::<LinkScheme>().map(|LinkScheme(scheme)| scheme.as_str()))
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    let mut url = match Url::parse(&format!("{}://{}", scheme, host)) {
        Ok(url) => url,
        Err(error) => {
            tracing::debug!(%error, host, "Cannot build request URL for page links");
            return None;
        }
    };

    url.set_path(uri.path());
    url.set_query(query.filter(|query| !query.is_empty()));
    Some(url)
}
