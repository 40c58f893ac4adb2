use axum::{extract::FromRequestParts, http::request::Parts};
use paramkit_config::SortingConfig;
use paramkit_core::{SortOption, Sorting};
use std::marker::PhantomData;
use std::ops::Deref;

use super::query::ClientQuery;
use crate::errors::WebError;

/// Sortable fields of a resource, in snake_case
///
/// ```rust
/// use paramkit_config::SortingConfig;
/// use paramkit_web::extractors::SortFields;
///
/// struct UserSort;
///
/// impl SortFields for UserSort {
///     const FIELDS: &'static [&'static str] = &["id", "created_at"];
///     const DEFAULT: &'static [&'static str] = &["-id"];
/// }
///
/// let sorting = UserSort::sorting(&SortingConfig::default());
/// assert_eq!(sorting.example(), "id,createdAt");
/// ```
pub trait SortFields: 'static {
    const FIELDS: &'static [&'static str];

    /// Tokens applied when the client sends no sort parameter
    const DEFAULT: &'static [&'static str] = &[];

    fn sorting(config: &SortingConfig) -> Sorting {
        Sorting::with_config(config.clone(), Self::FIELDS.iter().copied()).with_default(Self::DEFAULT.iter().copied())
    }
}

/// Parsed sort options for the resource described by `T`
///
/// The [`SortingConfig`] request extension is used when present.
pub struct Sorted<T> {
    pub options: Vec<SortOption>,
    _fields: PhantomData<fn() -> T>,
}

impl<T> Sorted<T> {
    pub fn into_inner(self) -> Vec<SortOption> {
        self.options
    }
}

impl<T> std::fmt::Debug for Sorted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Sorted").field(&self.options).finish()
    }
}

impl<T> Deref for Sorted<T> {
    type Target = [SortOption];

    fn deref(&self) -> &Self::Target {
        &self.options
    }
}

impl<S, T> FromRequestParts<S> for Sorted<T>
where
    S: Send + Sync,
    T: SortFields,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let config = parts.extensions.get::<SortingConfig>().cloned().unwrap_or_default();
        let query = ClientQuery::from_parts(parts);
        let options = T::sorting(&config).parse_query(query.as_deref())?;

        Ok(Sorted {
            options,
            _fields: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::{routing::get, Extension, Json, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct ItemSort;

    impl SortFields for ItemSort {
        const FIELDS: &'static [&'static str] = &["id", "created_at"];
        const DEFAULT: &'static [&'static str] = &["-id"];
    }

    async fn list_items(sort: Sorted<ItemSort>) -> Json<Vec<SortOption>> {
        Json(sort.into_inner())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn app() -> Router {
        Router::new().route("/items", get(list_items))
    }

    #[tokio::test]
    async fn test_sort_parameter_is_parsed() {
        let (status, body) = get_json(app(), "/items?sort=-createdAt,id").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"field": "created_at", "direction": "desc"},
                {"field": "id", "direction": "asc"}
            ])
        );
    }

    #[tokio::test]
    async fn test_default_sort_applies() {
        let (_, body) = get_json(app(), "/items").await;
        assert_eq!(body, json!([{"field": "id", "direction": "desc"}]));
    }

    #[tokio::test]
    async fn test_unknown_sort_key_is_rejected() {
        let (status, body) = get_json(app(), "/items?sort=price").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let detail = &body["error"]["details"][0];
        assert_eq!(detail["field"], "query.sort");
        assert_eq!(detail["code"], "value_error.enum");
        assert_eq!(
            detail["message"],
            "Unknown sorting key 'price', should be one of: id, createdAt, -id, -createdAt"
        );
    }

    #[tokio::test]
    async fn test_configured_parameter_and_delimiter() {
        let config = SortingConfig {
            query_param_name: "orderBy".to_string(),
            delimiter: ";".to_string(),
            negative_sorting_allowed: false,
            ..Default::default()
        };
        let app = app().layer(Extension(config));

        let (status, body) = get_json(app.clone(), "/items?orderBy=createdAt;id").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"field": "created_at", "direction": "asc"}, {"field": "id", "direction": "asc"}]));

        let (status, body) = get_json(app, "/items?orderBy=-id").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["details"][0]["field"], "query.orderBy");
    }
}
