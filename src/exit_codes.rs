//! Exit code standardization for labbudget
//!
//! Provides consistent exit codes for different error types so scripts can
//! tell bad input apart from a broken config file.
//!
//! ## Exit Code Convention
//!
//! - `0` = Success
//! - `1` = User error (invalid input, validation failure)
//! - `2` = System error (I/O, serialization)
//! - `3` = Configuration error (config parse error, invalid pricing override)

use crate::error::BudgetError;

/// Standard exit codes for labbudget
pub mod codes {
    /// Success
    #[allow(dead_code)]
    pub const SUCCESS: i32 = 0;
    /// User error (invalid input, validation failure)
    pub const USER_ERROR: i32 = 1;
    /// System error (I/O, serialization)
    pub const SYSTEM_ERROR: i32 = 2;
    /// Configuration error (config parse error, invalid pricing override)
    pub const CONFIG_ERROR: i32 = 3;
}

/// Map a BudgetError to an appropriate exit code
pub fn exit_code_for_error(error: &BudgetError) -> i32 {
    use BudgetError::*;
    match error {
        Config(_) => codes::CONFIG_ERROR,
        Validation { .. } => codes::USER_ERROR,
        Io(_) => codes::SYSTEM_ERROR,
        Json(_) => codes::SYSTEM_ERROR,
    }
}

/// Exit code for an error that reached `main`.
///
/// Errors that did not originate as a `BudgetError` (TOML parsing wrapped by
/// `anyhow` context, for instance) are reported as system errors.
pub fn exit_code_for_anyhow(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<BudgetError>()
        .map(exit_code_for_error)
        .unwrap_or(codes::SYSTEM_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_exit_codes_by_category() {
        let validation = BudgetError::validation("users", "negative");
        assert_eq!(exit_code_for_error(&validation), codes::USER_ERROR);

        let config = BudgetError::Config(ConfigError::ParseError("x".into()));
        assert_eq!(exit_code_for_error(&config), codes::CONFIG_ERROR);

        let io = BudgetError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(exit_code_for_error(&io), codes::SYSTEM_ERROR);
    }

    #[test]
    fn test_exit_code_for_anyhow_downcasts() {
        let err = anyhow::Error::from(BudgetError::validation("budget", "negative"));
        assert_eq!(exit_code_for_anyhow(&err), codes::USER_ERROR);

        let other = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for_anyhow(&other), codes::SYSTEM_ERROR);
    }
}
