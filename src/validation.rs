//! Input validation utilities
//!
//! The cost model accepts anything and lets `NaN`/`Infinity` through. These
//! checks are the opt-in strict mode (`labbudget estimate --strict`).

use crate::error::{BudgetError, Result};
use crate::model::{Configuration, CostResult, Mode};

const MAX_HOURS_PER_DAY: f64 = 24.0;

/// Validate estimate inputs.
///
/// Counts, hours, storage and money must be finite and non-negative, hours
/// cannot exceed 24, and the exchange rate must be positive.
pub fn validate_configuration(config: &Configuration) -> Result<()> {
    let non_negative = [
        ("budget", config.budget),
        ("runtime_per_day", config.runtime_per_day),
        ("instances_per_person", config.instances_per_person),
        ("storage_per_instance", config.storage_per_instance),
        ("number_of_users", config.number_of_users),
        ("desired_days", config.desired_days),
    ];

    for (field, value) in non_negative {
        validate_finite(field, value)?;
        if value < 0.0 {
            return Err(BudgetError::validation(
                field,
                format!("must not be negative, got: {}", value),
            ));
        }
    }

    if config.runtime_per_day > MAX_HOURS_PER_DAY {
        return Err(BudgetError::validation(
            "runtime_per_day",
            format!(
                "must be at most {} hours, got: {}",
                MAX_HOURS_PER_DAY, config.runtime_per_day
            ),
        ));
    }

    validate_finite("exchange_rate", config.exchange_rate)?;
    if config.exchange_rate <= 0.0 {
        return Err(BudgetError::validation(
            "exchange_rate",
            format!("must be positive, got: {}", config.exchange_rate),
        ));
    }

    Ok(())
}

/// Validate a computed result before presenting it.
///
/// A zero daily cost makes affordable days infinite, so it is rejected in
/// BudgetToDays mode. Any non-finite daily cost is rejected in both modes.
pub fn validate_result(result: &CostResult, mode: Mode) -> Result<()> {
    validate_finite("daily_cost_inr", result.daily_cost_inr)?;

    if mode == Mode::BudgetToDays && result.daily_cost_inr <= 0.0 {
        return Err(BudgetError::validation(
            "daily_cost_inr",
            format!(
                "must be positive to compute affordable days, got: {}",
                result.daily_cost_inr
            ),
        ));
    }

    Ok(())
}

fn validate_finite(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BudgetError::validation(
            field,
            format!("must be a finite number, got: {}", value),
        ));
    }
    Ok(())
}
