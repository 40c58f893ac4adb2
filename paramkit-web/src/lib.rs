//! # Paramkit Web
//!
//! Axum integration for paramkit pagination and sorting parameters.
//! Clients speak camelCase while handlers and OpenAPI declarations are
//! written in snake_case; this crate bridges the two.
//!
//! ## Features
//!
//! - **Middleware**: camelCase to snake_case query key rewriting
//! - **Extractors**: validated [`Paging`](extractors::Paging), [`Sorted`](extractors::Sorted) and [`Filters`](extractors::Filters) parameters
//! - **Errors**: parameter failures rendered as field-level validation responses
//!
//! ## Example
//!
//! ```rust,no_run
//! use axum::{routing::get, Extension, Json, Router};
//! use paramkit_core::{Paginated, Pagination};
//! use paramkit_web::{extractors::Paging, middleware::camel_case_query_layer};
//!
//! async fn list_items(Paging(paginator): Paging) -> Json<Paginated<String>> {
//!     Json(paginator.build(Vec::new(), Some(0)))
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let app: Router = Router::new()
//!     .route("/items", get(list_items))
//!     .layer(Extension(Pagination::default()))
//!     .layer(camel_case_query_layer());
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;

// Re-export commonly used types and functions
pub use errors::{ValidationError, WebError, WebResult};
pub use extractors::{request_url, ClientQuery, Filters, LinkScheme, Paging, SortFields, Sorted};
pub use middleware::{camel_case_query_layer, CamelCaseQueryLayer, OriginalQuery};
