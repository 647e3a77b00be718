//! Reference AWS pricing used by the cost model
//!
//! Rates are on-demand list prices in USD. They live here as named constants
//! and are carried through the model in a `PricingRates` value so tests and
//! config files can substitute other prices.

use serde::{Deserialize, Serialize};

/// EC2 on-demand rate per instance-hour (t2.medium)
pub const EC2_RATE_USD: f64 = 0.0464;

/// gp3 storage rate per GB per month
pub const STORAGE_RATE_USD: f64 = 0.08;

/// Flat surcharge applied when maintenance is enabled (+25%)
pub const MAINTENANCE_MULTIPLIER: f64 = 1.25;

/// Monthly storage is spread over a fixed 30-day month
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Daily cost (INR) above which the optimization tip is shown
pub const OPTIMIZATION_TIP_DAILY_INR: f64 = 250.0;

/// Affordable-day count below which the optimization tip is shown
pub const OPTIMIZATION_TIP_MIN_DAYS: f64 = 10.0;

pub const EC2_INSTANCE_LABEL: &str = "t2.medium";
pub const STORAGE_VOLUME_LABEL: &str = "gp3";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRates {
    /// USD per instance-hour
    pub ec2_rate_usd: f64,
    /// USD per GB-month
    pub storage_rate_usd: f64,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            ec2_rate_usd: EC2_RATE_USD,
            storage_rate_usd: STORAGE_RATE_USD,
        }
    }
}

impl PricingRates {
    pub fn new(ec2_rate_usd: f64, storage_rate_usd: f64) -> Self {
        Self {
            ec2_rate_usd,
            storage_rate_usd,
        }
    }

    /// Multiplier for the given maintenance setting
    pub fn maintenance_multiplier(maintenance_enabled: bool) -> f64 {
        if maintenance_enabled {
            MAINTENANCE_MULTIPLIER
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let rates = PricingRates::default();
        assert_eq!(rates.ec2_rate_usd, 0.0464);
        assert_eq!(rates.storage_rate_usd, 0.08);
    }

    #[test]
    fn test_maintenance_multiplier() {
        assert_eq!(PricingRates::maintenance_multiplier(true), 1.25);
        assert_eq!(PricingRates::maintenance_multiplier(false), 1.0);
    }
}
