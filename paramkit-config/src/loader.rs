//! Configuration loading and environment variable handling

use crate::domains::ParamkitConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "PARAMKIT".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    /// Load configuration from a YAML (or `.json`) file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<ParamkitConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let mut config: ParamkitConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;

        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<ParamkitConfig> {
        let mut config = ParamkitConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<ParamkitConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut ParamkitConfig) -> ConfigResult<()> {
        self.apply_pagination_overrides(&mut config.pagination)?;
        self.apply_sorting_overrides(&mut config.sorting)?;
        self.apply_server_overrides(&mut config.server)?;
        self.apply_logging_overrides(&mut config.logging)?;
        Ok(())
    }

    fn apply_pagination_overrides(
        &self,
        config: &mut crate::domains::pagination::PaginationConfig,
    ) -> ConfigResult<()> {
        if let Ok(size) = self.get_env_var("DEFAULT_PAGE_SIZE") {
            config.default_page_size = size
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid DEFAULT_PAGE_SIZE: {}", e)))?;
        }

        if let Ok(max) = self.get_env_var("MAX_PAGE_SIZE") {
            config.max_page_size = if max.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(
                    max.parse()
                        .map_err(|e| ConfigError::EnvError(format!("Invalid MAX_PAGE_SIZE: {}", e)))?,
                )
            };
        }

        Ok(())
    }

    fn apply_sorting_overrides(&self, config: &mut crate::domains::sorting::SortingConfig) -> ConfigResult<()> {
        if let Ok(delimiter) = self.get_env_var("SORT_DELIMITER") {
            config.delimiter = delimiter;
        }

        Ok(())
    }

    fn apply_server_overrides(&self, config: &mut crate::domains::server::ServerConfig) -> ConfigResult<()> {
        if let Ok(bind_address) = self.get_env_var("BIND_ADDRESS") {
            config.bind_address = bind_address;
        }

        if let Ok(port) = self.get_env_var("PORT") {
            config.port = port
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid PORT: {}", e)))?;
        }

        Ok(())
    }

    fn apply_logging_overrides(&self, config: &mut crate::domains::logging::LoggingConfig) -> ConfigResult<()> {
        if let Ok(level) = self.get_env_var("LOG_LEVEL") {
            config.level = level.parse().map_err(ConfigError::EnvError)?;
        }

        if let Ok(format) = self.get_env_var("LOG_FORMAT") {
            config.format = format.parse().map_err(ConfigError::EnvError)?;
        }

        Ok(())
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, key: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, key))
    }
}
