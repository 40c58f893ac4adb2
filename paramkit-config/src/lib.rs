//! Domain-driven configuration for paramkit
//!
//! Each functional area (pagination, sorting, server, logging) owns a
//! serde-deserializable domain struct with defaults and validation. The
//! [`ConfigLoader`] reads them from a YAML or JSON file and applies
//! `PARAMKIT_*` environment overrides.

pub mod domains;
pub mod error;
pub mod loader;
pub mod validation;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::Validatable;

// Re-export domain configurations
pub use domains::{
    logging::{LogFormat, LogLevel, LoggingConfig},
    pagination::PaginationConfig,
    server::ServerConfig,
    sorting::SortingConfig,
    ParamkitConfig,
};
