use axum::{extract::FromRequestParts, http::request::Parts};
use paramkit_core::{Pagination, Paginator};

use super::query::ClientQuery;
use super::request_url::request_url;
use crate::errors::WebError;

/// Validated paginator for the current request
///
/// Reads the page and page size parameters named by the [`Pagination`]
/// request extension (defaults apply when none is installed) and wires the
/// request URL in for next/previous links.
///
/// ```rust,no_run
/// use axum::{routing::get, Extension, Json, Router};
/// use paramkit_core::{Paginated, Pagination};
/// use paramkit_web::extractors::Paging;
///
/// async fn list_numbers(Paging(paginator): Paging) -> Json<Paginated<u64>> {
///     let items = (paginator.offset()..paginator.offset() + paginator.limit()).collect();
///     Json(paginator.build(items, None))
/// }
///
/// let app: Router = Router::new()
///     .route("/numbers", get(list_numbers))
///     .layer(Extension(Pagination::default()));
/// ```
#[derive(Debug, Clone)]
pub struct Paging(pub Paginator);

impl Paging {
    pub fn into_inner(self) -> Paginator {
        self.0
    }
}

impl<S> FromRequestParts<S> for Paging
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pagination = parts.extensions.get::<Pagination>().cloned().unwrap_or_default();
        let query = ClientQuery::from_parts(parts);
        let url = request_url(parts, query.as_deref());

        let paginator = pagination.from_query(query.as_deref(), url)?;
        Ok(Paging(paginator))
    }
}
