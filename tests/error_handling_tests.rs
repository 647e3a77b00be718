//! Error handling tests
//!
//! The model never fails; strict validation and config loading do.

use labbudget::config::Config;
use labbudget::error::{BudgetError, ConfigError};
use labbudget::exit_codes::{codes, exit_code_for_anyhow, exit_code_for_error};
use labbudget::validation::{validate_configuration, validate_result};
use labbudget::{compute, Configuration, Mode};
use tempfile::TempDir;

#[test]
fn test_model_accepts_negative_inputs() {
    let config = Configuration {
        runtime_per_day: -5.0,
        ..Configuration::default()
    };
    let result = compute(&config);
    assert!(result.instance_cost_usd < 0.0);
    assert!(validate_configuration(&config).is_err());
}

#[test]
fn test_model_accepts_non_finite_inputs() {
    let config = Configuration {
        exchange_rate: f64::INFINITY,
        ..Configuration::default()
    };
    let result = compute(&config);
    assert!(result.daily_cost_inr.is_infinite());
    // inf / inf
    assert!(result.required_budget_usd.is_nan());
}

#[test]
fn test_strict_rejects_zero_exchange_rate() {
    let config = Configuration {
        exchange_rate: 0.0,
        ..Configuration::default()
    };
    let err = validate_configuration(&config).unwrap_err();
    match &err {
        BudgetError::Validation { field, reason } => {
            assert_eq!(field, "exchange_rate");
            assert!(reason.contains("positive"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(exit_code_for_error(&err), codes::USER_ERROR);
}

#[test]
fn test_strict_rejects_zero_daily_cost_in_budget_mode() {
    let config = Configuration {
        instances_per_person: 0.0,
        mode: Mode::BudgetToDays,
        ..Configuration::default()
    };
    assert!(validate_configuration(&config).is_ok());
    let result = compute(&config);
    assert!(result.affordable_days.is_infinite());
    assert!(validate_result(&result, config.mode).is_err());
}

#[test]
fn test_valid_result_passes() {
    let config = Configuration {
        mode: Mode::BudgetToDays,
        ..Configuration::default()
    };
    let result = compute(&config);
    assert!(validate_result(&result, config.mode).is_ok());
}

#[test]
fn test_config_parse_error_maps_to_config_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "[estimate]\nmode = \"weekly\"\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert_eq!(exit_code_for_anyhow(&err), codes::CONFIG_ERROR);
    assert!(format!("{:#}", err).contains("labbudget init"));
}

#[test]
fn test_config_invalid_rate_maps_to_config_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nan.toml");
    std::fs::write(&path, "[pricing]\nstorage_rate_usd = nan\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert_eq!(exit_code_for_anyhow(&err), codes::CONFIG_ERROR);
    assert!(matches!(
        err.downcast_ref::<BudgetError>(),
        Some(BudgetError::Config(ConfigError::InvalidValue { .. }))
    ));
}
