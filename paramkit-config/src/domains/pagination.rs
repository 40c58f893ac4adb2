//! Pagination query parameter configuration

use crate::error::ConfigResult;
use crate::validation::{validate_positive, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Smallest valid page number
pub const MIN_PAGE: u64 = 1;

/// Smallest valid page size
pub const MIN_PAGE_SIZE: u64 = 1;

/// Pagination configuration
///
/// `max_page_size: None` leaves the page size unbounded. When
/// `page_size_query_param_name` is `None` the page size cannot be chosen by
/// the client and is always `default_page_size`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page used when the request does not name one
    #[serde(default = "default_page")]
    pub default_page: u64,

    /// Page size used when the request does not name one
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,

    /// Upper bound for the requested page size
    #[serde(default = "default_max_page_size")]
    pub max_page_size: Option<u64>,

    /// Query parameter carrying the page number
    #[serde(default = "default_page_query_param_name")]
    pub page_query_param_name: String,

    /// Query parameter carrying the page size
    #[serde(default = "default_page_size_query_param_name")]
    pub page_size_query_param_name: Option<String>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            page_query_param_name: default_page_query_param_name(),
            page_size_query_param_name: default_page_size_query_param_name(),
        }
    }
}

impl Validatable for PaginationConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.default_page, "default_page", self.domain_name())?;
        validate_positive(self.default_page_size, "default_page_size", self.domain_name())?;

        if let Some(max) = self.max_page_size {
            validate_positive(max, "max_page_size", self.domain_name())?;
            if self.default_page_size > max {
                return Err(self.validation_error(format!(
                    "default_page_size ({}) exceeds max_page_size ({})",
                    self.default_page_size, max
                )));
            }
        }

        validate_required_string(&self.page_query_param_name, "page_query_param_name", self.domain_name())?;

        if let Some(name) = &self.page_size_query_param_name {
            validate_required_string(name, "page_size_query_param_name", self.domain_name())?;
            if *name == self.page_query_param_name {
                return Err(self.validation_error("page and page size query parameters must differ"));
            }
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "pagination"
    }
}

fn default_page() -> u64 {
    MIN_PAGE
}

fn default_page_size() -> u64 {
    10
}

fn default_max_page_size() -> Option<u64> {
    Some(20)
}

fn default_page_query_param_name() -> String {
    "page".to_string()
}

fn default_page_size_query_param_name() -> Option<String> {
    Some("pageSize".to_string())
}
