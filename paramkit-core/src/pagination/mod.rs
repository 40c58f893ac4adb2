//! Page-number pagination
//!
//! [`Pagination`] validates the page and page-size request values against a
//! [`PaginationConfig`] and yields a [`Paginator`]. The paginator hands out
//! `limit`/`offset` for the data fetch and afterwards wraps the fetched items
//! into a [`Paginated`] envelope with page counts and next/previous links.
//!
//! ```
//! use paramkit_core::pagination::Pagination;
//! use url::Url;
//!
//! let pagination = Pagination::default();
//! let url = Url::parse("http://localhost/users?page=1&pageSize=10").unwrap();
//! let paginator = pagination.paginator(Some(1), Some(10), Some(url)).unwrap();
//!
//! assert_eq!((paginator.limit(), paginator.offset()), (10, 0));
//!
//! let page = paginator.build((1..=10).collect::<Vec<u32>>(), Some(25));
//! assert_eq!(page.pagination.total_pages, Some(3));
//! assert!(page.pagination.prev_page.is_none());
//! assert_eq!(
//!     page.pagination.next_page.unwrap().as_str(),
//!     "http://localhost/users?page=2&pageSize=10"
//! );
//! ```

pub mod paginator;
pub mod response;

pub use paginator::{PageRequest, Paginator};
pub use response::{Paginated, PaginationInfo};

use crate::errors::{ParamError, ParamResult};
use crate::query::query_value;
use paramkit_config::domains::pagination::{MIN_PAGE, MIN_PAGE_SIZE};
use paramkit_config::PaginationConfig;
use url::Url;

/// Pagination parameter definition shared by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    config: PaginationConfig,
}

impl Pagination {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Apply defaults and bounds to the requested page and page size.
    ///
    /// The page size is ignored when no page size parameter is configured.
    pub fn page_request(&self, page: Option<i64>, page_size: Option<i64>) -> ParamResult<PageRequest> {
        let page = page.unwrap_or(self.config.default_page as i64);
        if page < MIN_PAGE as i64 {
            return Err(self.bounds_error(&self.config.page_query_param_name, page, MIN_PAGE, None));
        }

        let page_size = match &self.config.page_size_query_param_name {
            Some(name) => {
                let size = page_size.unwrap_or(self.config.default_page_size as i64);
                let max = self.config.max_page_size;
                let above_max = max.is_some_and(|max| size > max as i64);
                if size < MIN_PAGE_SIZE as i64 || above_max {
                    return Err(self.bounds_error(name, size, MIN_PAGE_SIZE, max));
                }
                size
            }
            None => self.config.default_page_size as i64,
        };

        PageRequest::new(page as u64, page_size as u64)
            .ok_or_else(|| self.bounds_error(&self.config.page_query_param_name, page, MIN_PAGE, None))
    }

    /// Validated paginator with link generation against `url`
    pub fn paginator(&self, page: Option<i64>, page_size: Option<i64>, url: Option<Url>) -> ParamResult<Paginator> {
        let request = self.page_request(page, page_size)?;

        let mut paginator =
            Paginator::new(request).with_page_query_param_name(self.config.page_query_param_name.clone());
        if let Some(name) = &self.config.page_size_query_param_name {
            paginator = paginator.with_page_size_query_param_name(name.clone());
        }
        if let Some(url) = url {
            paginator = paginator.with_url(url);
        }

        Ok(paginator)
    }

    /// Read the configured parameters out of a raw query string and build a paginator
    pub fn from_query(&self, raw_query: Option<&str>, url: Option<Url>) -> ParamResult<Paginator> {
        let page = integer_param(raw_query, &self.config.page_query_param_name)?;
        let page_size = match &self.config.page_size_query_param_name {
            Some(name) => integer_param(raw_query, name)?,
            None => None,
        };

        self.paginator(page, page_size, url)
    }

    fn bounds_error(&self, param: &str, value: i64, min: u64, max: Option<u64>) -> ParamError {
        tracing::debug!(param, value, "Rejected out-of-range pagination parameter");
        ParamError::InvalidPageBounds {
            param: param.to_string(),
            value,
            min,
            max,
        }
    }
}

fn integer_param(raw_query: Option<&str>, name: &str) -> ParamResult<Option<i64>> {
    let Some(value) = raw_query.and_then(|query| query_value(query, name)) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ParamError::InvalidInteger {
            param: name.to_string(),
            value,
        })
}
