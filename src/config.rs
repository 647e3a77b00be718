use crate::error::{BudgetError, ConfigError};
use crate::model::Configuration;
use crate::pricing::PricingRates;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const LOCAL_CONFIG_FILE: &str = ".labbudget.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pricing overrides (defaults to the reference AWS rates)
    #[serde(default)]
    pub pricing: PricingRates,
    /// Default estimate inputs, overridden by CLI flags
    #[serde(default)]
    pub estimate: Configuration,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            // Try .labbudget.toml in current dir, then ~/.config/labbudget/config.toml
            let local = PathBuf::from(LOCAL_CONFIG_FILE);
            if local.exists() {
                local
            } else {
                dirs::config_dir()
                    .map(|d| d.join("labbudget").join("config.toml"))
                    .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
            }
        };

        if config_path.exists() {
            debug!("Loading config from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| BudgetError::from(ConfigError::ParseError(e.to_string())))
                .with_context(|| {
                    let mut err = format!("Failed to parse config: {}", config_path.display());
                    err.push_str("\n  Common issues:");
                    err.push_str("\n    - Invalid TOML syntax");
                    err.push_str("\n    - Unknown deployment_type or mode value");
                    err.push_str("\n    - Incorrect value types");
                    err.push_str("\n  Tip: Run 'labbudget init' to create a new config file");
                    err
                })?;
            config.validate_pricing().map_err(BudgetError::from)?;
            Ok(config)
        } else {
            // Use defaults but warn if user explicitly provided a path
            if path.is_some() {
                eprintln!("WARNING: Config file not found: {}", config_path.display());
                eprintln!(
                    "   Using default configuration. Run 'labbudget init' to create a config file."
                );
            }
            Ok(Config::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Pricing overrides must be finite and non-negative.
    pub fn validate_pricing(&self) -> std::result::Result<(), ConfigError> {
        let rates = [
            ("pricing.ec2_rate_usd", self.pricing.ec2_rate_usd),
            ("pricing.storage_rate_usd", self.pricing.storage_rate_usd),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("must be a finite, non-negative rate, got: {}", value),
                });
            }
        }
        Ok(())
    }
}

pub fn init_config(output: &Path) -> Result<()> {
    let config = Config::default();
    config.save(output)?;
    println!("Created config file: {}", output.display());
    Ok(())
}
