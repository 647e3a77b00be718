//! Interactive calculator state
//!
//! `Calculator` owns one `Configuration` and the `CostResult` derived from
//! it. Every mutation goes through a method that recomputes the result before
//! returning, so `result()` is never stale.

use crate::deployment::DeploymentType;
use crate::model::{compute_with_rates, Configuration, CostResult, Mode};
use crate::pricing::PricingRates;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Calculator {
    configuration: Configuration,
    rates: PricingRates,
    result: CostResult,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl Calculator {
    pub fn new(configuration: Configuration) -> Self {
        Self::with_rates(configuration, PricingRates::default())
    }

    pub fn with_rates(configuration: Configuration, rates: PricingRates) -> Self {
        let result = compute_with_rates(&configuration, &rates);
        Self {
            configuration,
            rates,
            result,
        }
    }

    /// Replace the configuration and recompute.
    pub fn set_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration;
        self.recompute();
    }

    /// Edit fields in place, then recompute.
    pub fn update<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut Configuration),
    {
        edit(&mut self.configuration);
        self.recompute();
    }

    /// Switch deployment type. Overwrites `instances_per_person` with the
    /// preset for `deployment_type`.
    pub fn set_deployment_type(&mut self, deployment_type: DeploymentType) {
        self.update(|c| c.apply_deployment_type(deployment_type));
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.update(|c| c.mode = mode);
    }

    pub fn set_rates(&mut self, rates: PricingRates) {
        self.rates = rates;
        self.recompute();
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn result(&self) -> &CostResult {
        &self.result
    }

    pub fn rates(&self) -> &PricingRates {
        &self.rates
    }

    pub fn should_show_optimization_tip(&self) -> bool {
        self.result.needs_optimization_tip(self.configuration.mode)
    }

    fn recompute(&mut self) {
        self.result = compute_with_rates(&self.configuration, &self.rates);
        debug!(
            "Recomputed estimate: daily ₹{:.2}, mode {:?}",
            self.result.daily_cost_inr, self.configuration.mode
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_immediately() {
        let calc = Calculator::default();
        assert!(calc.result().daily_cost_inr > 0.0);
    }

    #[test]
    fn test_update_recomputes() {
        let mut calc = Calculator::default();
        let before = calc.result().daily_cost_inr;
        calc.update(|c| c.number_of_users = 2.0);
        assert!((calc.result().daily_cost_inr - before * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_rates_recomputes() {
        let mut calc = Calculator::default();
        calc.set_rates(PricingRates::new(0.0, 0.0));
        assert_eq!(calc.result().daily_cost_inr, 0.0);
    }
}
