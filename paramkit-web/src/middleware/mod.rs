pub mod camel_case_query;

// Re-export layer creation functions
pub use camel_case_query::{camel_case_query_layer, CamelCaseQuery, CamelCaseQueryLayer, OriginalQuery};
