//! # paramkit core
//!
//! Request-parameter utilities for HTTP list endpoints: page-number
//! pagination with next/previous links, multi-key sorting with allow-list
//! validation, and snake_case / camelCase translation of parameter names.
//!
//! Everything here is synchronous and free of I/O. A web layer supplies the
//! raw query string and request URL; the core returns plain values (or a
//! [`ParamError`]) for it to serialize.
//!
//! ## Example
//!
//! ```rust
//! use paramkit_core::{Pagination, Sorting, SortOption};
//!
//! let sorting = Sorting::new(["id", "created_at"]).with_default(["-id"]);
//! let pagination = Pagination::default();
//!
//! let query = Some("page=2&pageSize=5&sort=-createdAt");
//! let sort = sorting.parse_query(query).unwrap();
//! let paginator = pagination.from_query(query, None).unwrap();
//!
//! assert_eq!(sort, vec![SortOption::desc("created_at")]);
//! assert_eq!((paginator.limit(), paginator.offset()), (5, 5));
//! ```

pub mod case;
pub mod errors;
pub mod openapi;
pub mod pagination;
pub mod query;
pub mod sorting;

// Re-export commonly used types and functions
pub use case::{camel_to_snake, snake_to_camel};
pub use errors::{ParamError, ParamResult};
pub use openapi::translate_schema_params;
pub use pagination::{PageRequest, Paginated, Pagination, PaginationInfo, Paginator};
pub use query::{normalize_incoming_query, query_value};
pub use sorting::{parse_sorting, SortDirection, SortOption, Sorting};

pub use paramkit_config::{PaginationConfig, SortingConfig};
