//! Domain-specific configuration modules

pub mod logging;
pub mod pagination;
pub mod server;
pub mod sorting;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main paramkit configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ParamkitConfig {
    /// Pagination query parameters
    #[serde(default)]
    pub pagination: pagination::PaginationConfig,

    /// Sorting query parameter
    #[serde(default)]
    pub sorting: sorting::SortingConfig,

    /// Server configuration (demo server and link generation)
    #[serde(default)]
    pub server: server::ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: logging::LoggingConfig,
}

impl ParamkitConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.pagination.validate()?;
        self.sorting.validate()?;
        self.server.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Generate a sample configuration file
    pub fn sample_yaml() -> ConfigResult<String> {
        Ok(serde_yaml::to_string(&Self::default())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ParamkitConfig::default().validate_all().is_ok());
    }

    #[test]
    fn test_sample_yaml_round_trips() {
        let yaml = ParamkitConfig::sample_yaml().unwrap();
        let parsed: ParamkitConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, ParamkitConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "pagination:\n  max_page_size: 50\nsorting:\n  delimiter: \";\"\n";
        let config: ParamkitConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.pagination.max_page_size, Some(50));
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.sorting.delimiter, ";");
        assert_eq!(config.sorting.query_param_name, "sort");
    }
}
