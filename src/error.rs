//! Error types for labbudget
//!
//! There are two error types: `BudgetError` (main error enum) and
//! `ConfigError` (configuration-specific).
//!
//! ## Error Handling Philosophy
//!
//! Library code uses `crate::error::Result<T>` which returns `BudgetError`.
//! CLI code uses `anyhow::Result<T>` for top-level error handling. The conversion
//! happens at the CLI boundary using `anyhow::Error::from` to preserve error chains.
//!
//! The cost model itself never returns an error. Zero, negative and non-finite
//! inputs flow through the arithmetic and surface as `NaN` or `Infinity` in the
//! result. Rejecting them is opt-in via `crate::validation`.
//!
//! ## When to Use Which Error
//!
//! - `ConfigError`: Configuration file parsing and pricing override issues
//!   - Automatically converted to `BudgetError::Config` via `#[from]`
//!
//! - `Validation`: Input validation failures
//!   - Use for estimate inputs (exchange rate, counts, hours) and CLI options
//!   - Produced only when strict validation is requested

use thiserror::Error;

/// Main error type for labbudget
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

impl BudgetError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BudgetError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = BudgetError::validation("exchange_rate", "must be positive");
        assert_eq!(
            err.to_string(),
            "Validation error: exchange_rate - must be positive"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: BudgetError = ConfigError::ParseError("bad toml".to_string()).into();
        assert!(matches!(err, BudgetError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }
}
