//! Request parameter validation errors
//!
//! Every variant names the query parameter it refers to, so a boundary layer
//! can turn it into a field-level validation response without inspecting the
//! message text.

use thiserror::Error;

/// Result type for parameter parsing
pub type ParamResult<T> = Result<T, ParamError>;

/// Validation failure for a pagination or sorting query parameter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Unknown sorting key '{value}', should be one of: {}", .allowed.join(", "))]
    UnknownSortField {
        param: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Sorting keys must be unique, '{value}' is duplicated")]
    DuplicateSortField { param: String, value: String },

    #[error("{}", bounds_message(.value, .min, .max))]
    InvalidPageBounds {
        param: String,
        value: i64,
        min: u64,
        max: Option<u64>,
    },

    #[error("Input should be a valid integer, got '{value}'")]
    InvalidInteger { param: String, value: String },
}

impl ParamError {
    /// Query parameter the error refers to
    pub fn param(&self) -> &str {
        match self {
            ParamError::UnknownSortField { param, .. }
            | ParamError::DuplicateSortField { param, .. }
            | ParamError::InvalidPageBounds { param, .. }
            | ParamError::InvalidInteger { param, .. } => param,
        }
    }

    /// Machine-readable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            ParamError::UnknownSortField { .. } => "value_error.enum",
            ParamError::DuplicateSortField { .. } => "value_error.list.unique_items",
            ParamError::InvalidPageBounds { value, min, .. } if *value < *min as i64 => "value_error.number.not_ge",
            ParamError::InvalidPageBounds { .. } => "value_error.number.not_le",
            ParamError::InvalidInteger { .. } => "type_error.integer",
        }
    }
}

fn bounds_message(value: &i64, min: &u64, max: &Option<u64>) -> String {
    match max {
        Some(max) if *value >= *min as i64 => format!("Input should be less than or equal to {}, got {}", max, value),
        _ => format!("Input should be greater than or equal to {}, got {}", min, value),
    }
}
