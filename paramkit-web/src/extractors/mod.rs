pub mod filters;
pub mod pagination;
pub mod query;
pub mod request_url;
pub mod sorting;

// Re-export commonly used extractors
pub use filters::Filters;
pub use pagination::Paging;
pub use query::ClientQuery;
pub use request_url::{request_url, LinkScheme};
pub use sorting::{SortFields, Sorted};
