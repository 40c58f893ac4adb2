//! Sorting query parameter configuration

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Sorting configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SortingConfig {
    /// Query parameter carrying the sort tokens
    #[serde(default = "default_query_param_name")]
    pub query_param_name: String,

    /// Separator between sort tokens
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Whether `-field` may be used to sort descending
    #[serde(default = "crate::domains::utils::default_true")]
    pub negative_sorting_allowed: bool,

    /// Whether clients send camelCase field names
    #[serde(default = "crate::domains::utils::default_true")]
    pub translate_camel_case: bool,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            query_param_name: default_query_param_name(),
            delimiter: default_delimiter(),
            negative_sorting_allowed: true,
            translate_camel_case: true,
        }
    }
}

impl Validatable for SortingConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.query_param_name, "query_param_name", self.domain_name())?;

        // Whitespace is trimmed from tokens, so it cannot act as a separator either.
        validate_required_string(&self.delimiter, "delimiter", self.domain_name())?;

        if self.delimiter.starts_with('-') {
            return Err(self.validation_error("delimiter cannot start with '-', it marks descending order"));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "sorting"
    }
}

fn default_query_param_name() -> String {
    "sort".to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}
