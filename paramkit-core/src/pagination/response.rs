//! Paginated response envelope

use serde::{Deserialize, Serialize};
use url::Url;

/// Pagination metadata returned alongside a page of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Current page (1-based)
    pub page: u64,
    /// Number of items actually returned on this page
    pub page_size: u64,
    pub total_pages: Option<u64>,
    pub total: Option<u64>,
    pub next_page: Option<Url>,
    pub prev_page: Option<Url>,
}

/// A page of items together with its pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T> Paginated<T> {
    /// Convert the items while keeping the pagination metadata
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
