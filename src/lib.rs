//! labbudget library
//!
//! Cost model for EC2-hosted training labs: the daily cost of running a
//! number of instances with gp3 storage for a group of users, and either the
//! budget needed for a number of days or the days a budget pays for.

pub mod config;
pub mod deployment;
pub mod error;
pub mod exit_codes;
pub mod model;
pub mod pricing;
pub mod session;
pub mod summary;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use deployment::DeploymentType;
pub use model::{compute, compute_with_rates, Configuration, CostResult, Mode};
pub use pricing::PricingRates;
pub use session::Calculator;
