use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use comfy_table::Table;
use labbudget::config::{self, Config};
use labbudget::error::BudgetError;
use labbudget::exit_codes::exit_code_for_anyhow;
use labbudget::summary::{render_json, render_text, Summary};
use labbudget::validation::{validate_configuration, validate_result};
use labbudget::{Calculator, Configuration, DeploymentType, Mode};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "labbudget")]
#[command(
    about = "Budget estimator for EC2-hosted training labs",
    long_about = "labbudget estimates what a training lab on AWS costs per day.\n\nModes:\n  - days-to-budget: budget required to run for a number of days\n  - budget-to-days: days a budget pays for\n\nPricing:\n  - EC2 t2.medium on-demand per instance-hour\n  - gp3 storage per GB-month\n  - optional +25% maintenance surcharge"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    output: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate daily cost and required budget or affordable days
    Estimate(EstimateArgs),
    /// List deployment presets and their default instance counts
    Presets,
    /// Initialize a config file with default pricing and inputs
    Init {
        /// Path of the config file to write
        #[arg(short, long, default_value = ".labbudget.toml")]
        path: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct EstimateArgs {
    /// What to solve for
    #[arg(long, value_enum)]
    mode: Option<Mode>,
    /// Spendable budget in INR (budget-to-days)
    #[arg(long)]
    budget: Option<f64>,
    /// Desired number of days (days-to-budget)
    #[arg(long)]
    days: Option<f64>,
    /// Hours per day each instance runs
    #[arg(long)]
    runtime: Option<f64>,
    /// Instances per person (overrides the deployment preset)
    #[arg(long)]
    instances: Option<f64>,
    /// gp3 storage per instance in GB
    #[arg(long)]
    storage: Option<f64>,
    /// Number of users
    #[arg(long)]
    users: Option<f64>,
    /// INR per USD
    #[arg(long)]
    exchange_rate: Option<f64>,
    /// Deployment preset; seeds instances per person
    #[arg(long, value_enum)]
    deployment: Option<DeploymentType>,
    /// Include the +25% maintenance surcharge
    #[arg(long)]
    maintenance: bool,
    /// Exclude the maintenance surcharge even if the config file enables it
    #[arg(long, conflicts_with = "maintenance")]
    no_maintenance: bool,
    /// Reject negative, zero or non-finite inputs instead of printing NaN/inf
    #[arg(long)]
    strict: bool,
}

impl EstimateArgs {
    /// Layer CLI flags over the config file defaults. The deployment preset
    /// goes first so an explicit `--instances` wins over it.
    fn apply(&self, configuration: &mut Configuration) {
        if let Some(deployment) = self.deployment {
            configuration.apply_deployment_type(deployment);
        }
        if let Some(mode) = self.mode {
            configuration.mode = mode;
        }
        let fields = [
            (self.budget, &mut configuration.budget),
            (self.days, &mut configuration.desired_days),
            (self.runtime, &mut configuration.runtime_per_day),
            (self.instances, &mut configuration.instances_per_person),
            (self.storage, &mut configuration.storage_per_instance),
            (self.users, &mut configuration.number_of_users),
            (self.exchange_rate, &mut configuration.exchange_rate),
        ];
        for (value, field) in fields {
            if let Some(v) = value {
                *field = v;
            }
        }
        if self.maintenance {
            configuration.maintenance_enabled = true;
        } else if self.no_maintenance {
            configuration.maintenance_enabled = false;
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Setup logging - only warnings and errors unless --verbose
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code_for_anyhow(&e));
    }
}

fn run(cli: Cli) -> Result<()> {
    validate_output_format(&cli.output)?;

    match cli.command {
        Commands::Estimate(args) => {
            let config = Config::load(cli.config.as_deref())?;
            estimate(&args, config, &cli.output)?;
        }
        Commands::Presets => {
            show_presets(&cli.output)?;
        }
        Commands::Init { path } => {
            config::init_config(&path)?;
        }
    }

    Ok(())
}

fn validate_output_format(output: &str) -> Result<(), BudgetError> {
    match output {
        "text" | "json" => Ok(()),
        other => Err(BudgetError::validation(
            "output",
            format!("Unsupported output format: {}. Use 'text' or 'json'", other),
        )),
    }
}

fn estimate(args: &EstimateArgs, config: Config, output: &str) -> Result<()> {
    let mut configuration = config.estimate;
    args.apply(&mut configuration);

    if args.strict {
        if let Err(e) = validate_configuration(&configuration) {
            warn!("Rejected estimate inputs: {}", e);
            return Err(e.into());
        }
    }

    let calculator = Calculator::with_rates(configuration, config.pricing);
    info!(
        "Daily cost ₹{:.2} for {} users",
        calculator.result().daily_cost_inr,
        calculator.configuration().number_of_users
    );

    if args.strict {
        validate_result(calculator.result(), calculator.configuration().mode)?;
    }

    let summary = Summary::from_calculator(&calculator);
    if output == "json" {
        println!("{}", render_json(&summary)?);
    } else {
        print!("{}", render_text(&summary));
    }
    Ok(())
}

fn show_presets(output: &str) -> Result<()> {
    if output == "json" {
        let presets: Vec<serde_json::Value> = DeploymentType::ALL
            .iter()
            .map(|t| {
                serde_json::json!({
                    "deployment_type": t,
                    "instances_per_person": t.default_instances(),
                    "description": t.description(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&presets)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Deployment", "Instances/Person", "Description"]);
    for t in DeploymentType::ALL {
        table.add_row(vec![
            t.as_str().to_string(),
            format!("{}", t.default_instances()),
            t.description().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_estimate_flags() {
        let cli = Cli::try_parse_from([
            "labbudget",
            "estimate",
            "--mode",
            "budget-to-days",
            "--budget",
            "3000",
            "--deployment",
            "non-clustered",
            "--maintenance",
        ])
        .unwrap();
        match cli.command {
            Commands::Estimate(args) => {
                assert_eq!(args.mode, Some(Mode::BudgetToDays));
                assert_eq!(args.budget, Some(3000.0));
                assert_eq!(args.deployment, Some(DeploymentType::NonClustered));
                assert!(args.maintenance);
            }
            _ => panic!("expected estimate command"),
        }
    }

    #[test]
    fn test_maintenance_flags_conflict() {
        let result = Cli::try_parse_from([
            "labbudget",
            "estimate",
            "--maintenance",
            "--no-maintenance",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_instances_override_preset() {
        let args = EstimateArgs {
            deployment: Some(DeploymentType::Standalone),
            instances: Some(3.0),
            ..EstimateArgs::default()
        };
        let mut configuration = Configuration::default();
        args.apply(&mut configuration);
        assert_eq!(configuration.deployment_type, DeploymentType::Standalone);
        assert_eq!(configuration.instances_per_person, 3.0);
    }

    #[test]
    fn test_preset_without_instances_overwrites() {
        let args = EstimateArgs {
            deployment: Some(DeploymentType::NonClustered),
            ..EstimateArgs::default()
        };
        let mut configuration = Configuration {
            instances_per_person: 12.0,
            ..Configuration::default()
        };
        args.apply(&mut configuration);
        assert_eq!(configuration.instances_per_person, 4.0);
    }

    #[test]
    fn test_no_maintenance_disables_config_default() {
        let args = EstimateArgs {
            no_maintenance: true,
            ..EstimateArgs::default()
        };
        let mut configuration = Configuration {
            maintenance_enabled: true,
            ..Configuration::default()
        };
        args.apply(&mut configuration);
        assert!(!configuration.maintenance_enabled);
    }

    #[test]
    fn test_output_format_validation() {
        assert!(validate_output_format("text").is_ok());
        assert!(validate_output_format("json").is_ok());
        assert!(validate_output_format("html").is_err());
    }
}
