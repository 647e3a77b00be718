//! Cost model
//!
//! `compute` turns a `Configuration` into a `CostResult`. It is a pure
//! function: no I/O, no clock, no validation. Zero or non-finite inputs
//! produce `NaN`/`Infinity` in the result instead of an error; callers that
//! want to reject such inputs use `crate::validation`.
//!
//! Costs are computed in USD and converted to INR by multiplying by the
//! exchange rate. The one exception is `required_budget_usd`, which is
//! derived from `required_budget_inr` by dividing by the rate.

use crate::deployment::DeploymentType;
use crate::pricing::{
    PricingRates, DAYS_PER_MONTH, OPTIMIZATION_TIP_DAILY_INR, OPTIMIZATION_TIP_MIN_DAYS,
};
use crate::utils::whole_days;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Which figure the estimate solves for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Budget needed to run for `desired_days`
    #[default]
    DaysToBudget,
    /// Days that `budget` pays for
    BudgetToDays,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::DaysToBudget => f.write_str("Days → Budget"),
            Mode::BudgetToDays => f.write_str("Budget → Days"),
        }
    }
}

/// Estimate inputs
///
/// All numeric fields are plain `f64` with no enforced bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Spendable budget in INR (BudgetToDays only)
    pub budget: f64,
    /// Hours per day each instance runs
    pub runtime_per_day: f64,
    pub instances_per_person: f64,
    /// GB of gp3 volume per instance
    pub storage_per_instance: f64,
    pub number_of_users: f64,
    /// INR per USD
    pub exchange_rate: f64,
    /// Target run length (DaysToBudget only)
    pub desired_days: f64,
    pub deployment_type: DeploymentType,
    pub maintenance_enabled: bool,
    pub mode: Mode,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            budget: 3000.0,
            runtime_per_day: 5.0,
            instances_per_person: DeploymentType::Clustered.default_instances(),
            storage_per_instance: 30.0,
            number_of_users: 1.0,
            exchange_rate: 84.0,
            desired_days: 10.0,
            deployment_type: DeploymentType::Clustered,
            maintenance_enabled: false,
            mode: Mode::DaysToBudget,
        }
    }
}

impl Configuration {
    /// Switch deployment type and overwrite the instance count with its preset.
    pub fn apply_deployment_type(&mut self, deployment_type: DeploymentType) {
        self.deployment_type = deployment_type;
        self.instances_per_person = deployment_type.default_instances();
        debug!(
            "Deployment type set to {} ({} instances per person)",
            deployment_type, self.instances_per_person
        );
    }
}

/// Derived figures for one `Configuration`
///
/// Component costs (`instance_cost_*`, `storage_cost_*`) include the
/// maintenance surcharge when it is enabled, same as the daily totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostResult {
    pub daily_cost_usd: f64,
    pub daily_cost_inr: f64,
    pub instance_cost_usd: f64,
    pub instance_cost_inr: f64,
    pub storage_cost_usd: f64,
    pub storage_cost_inr: f64,
    /// Fractional days covered by the budget; 0 in DaysToBudget mode
    pub affordable_days: f64,
    /// 0 in BudgetToDays mode
    pub required_budget_usd: f64,
    /// 0 in BudgetToDays mode
    pub required_budget_inr: f64,
    /// Whole affordable days times the daily cost; 0 in DaysToBudget mode
    pub total_budget_used: f64,
}

impl CostResult {
    /// Whether the cost is high enough (or the runway short enough) to
    /// suggest cutting runtime or instance counts.
    pub fn needs_optimization_tip(&self, mode: Mode) -> bool {
        self.daily_cost_inr > OPTIMIZATION_TIP_DAILY_INR
            || (mode == Mode::BudgetToDays && self.affordable_days < OPTIMIZATION_TIP_MIN_DAYS)
    }
}

/// Compute costs with the reference AWS rates.
pub fn compute(config: &Configuration) -> CostResult {
    compute_with_rates(config, &PricingRates::default())
}

pub fn compute_with_rates(config: &Configuration, rates: &PricingRates) -> CostResult {
    let fleet = config.instances_per_person * config.number_of_users;

    let instance_cost_usd = rates.ec2_rate_usd * config.runtime_per_day * fleet;
    let instance_cost_inr = instance_cost_usd * config.exchange_rate;

    let storage_cost_monthly_usd = rates.storage_rate_usd * config.storage_per_instance * fleet;
    let storage_cost_usd = storage_cost_monthly_usd / DAYS_PER_MONTH;
    let storage_cost_inr = storage_cost_usd * config.exchange_rate;

    let base_daily_cost_usd = instance_cost_usd + storage_cost_usd;
    let base_daily_cost_inr = base_daily_cost_usd * config.exchange_rate;

    let multiplier = PricingRates::maintenance_multiplier(config.maintenance_enabled);
    let daily_cost_usd = base_daily_cost_usd * multiplier;
    let daily_cost_inr = base_daily_cost_inr * multiplier;

    let mut result = CostResult {
        daily_cost_usd,
        daily_cost_inr,
        instance_cost_usd: instance_cost_usd * multiplier,
        instance_cost_inr: instance_cost_inr * multiplier,
        storage_cost_usd: storage_cost_usd * multiplier,
        storage_cost_inr: storage_cost_inr * multiplier,
        ..CostResult::default()
    };

    match config.mode {
        Mode::BudgetToDays => {
            result.affordable_days = config.budget / daily_cost_inr;
            result.total_budget_used = whole_days(result.affordable_days) * daily_cost_inr;
        }
        Mode::DaysToBudget => {
            result.required_budget_inr = config.desired_days * daily_cost_inr;
            result.required_budget_usd = result.required_budget_inr / config.exchange_rate;
        }
    }

    debug!(
        mode = ?config.mode,
        daily_cost_inr = result.daily_cost_inr,
        "Computed lab cost"
    );

    result
}
