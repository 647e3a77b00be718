//! Estimate summary and rendering
//!
//! `Summary` collects the presentation figures derived from a configuration
//! and its result: whole days, leftover budget, the maintenance line and the
//! per-person split. `render_text` prints it as tables, `render_json` as
//! pretty JSON.

use crate::error::Result;
use crate::model::{Configuration, CostResult, Mode};
use crate::pricing::{
    PricingRates, EC2_INSTANCE_LABEL, MAINTENANCE_MULTIPLIER, STORAGE_VOLUME_LABEL,
};
use crate::session::Calculator;
use crate::utils::{format_count, format_inr, format_usd, per_person, whole_days};
use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, Table};
use console::style;
use serde::Serialize;

/// Maintenance line shown when the surcharge is enabled
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaintenanceCost {
    pub inr: f64,
    pub usd: f64,
}

/// Figures divided by the number of users (only when there is more than one)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerPersonBreakdown {
    /// DaysToBudget only
    pub required_budget_inr: Option<f64>,
    pub daily_cost_inr: f64,
    pub instance_cost_inr: f64,
    pub storage_cost_inr: f64,
    pub maintenance_inr: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub generated_at: DateTime<Utc>,
    pub configuration: Configuration,
    pub rates: PricingRates,
    pub result: CostResult,
    /// BudgetToDays only
    pub whole_days: Option<f64>,
    /// BudgetToDays only
    pub remaining_budget: Option<f64>,
    pub maintenance: Option<MaintenanceCost>,
    pub per_person: Option<PerPersonBreakdown>,
    pub optimization_tip: bool,
}

impl Summary {
    pub fn new(
        configuration: &Configuration,
        result: &CostResult,
        rates: &PricingRates,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let budget_to_days = configuration.mode == Mode::BudgetToDays;
        let users = configuration.number_of_users;

        // Surcharge share of the (already surcharged) component costs
        let surcharge = MAINTENANCE_MULTIPLIER - 1.0;
        let maintenance = configuration.maintenance_enabled.then(|| MaintenanceCost {
            inr: (result.instance_cost_inr + result.storage_cost_inr) * surcharge,
            usd: (result.instance_cost_usd + result.storage_cost_usd) * surcharge,
        });

        let per_person = (users > 1.0).then(|| PerPersonBreakdown {
            required_budget_inr: (!budget_to_days)
                .then(|| per_person(result.required_budget_inr, users)),
            daily_cost_inr: per_person(result.daily_cost_inr, users),
            instance_cost_inr: per_person(result.instance_cost_inr, users),
            storage_cost_inr: per_person(result.storage_cost_inr, users),
            maintenance_inr: maintenance.map(|m| per_person(m.inr, users)),
        });

        Self {
            generated_at,
            configuration: configuration.clone(),
            rates: *rates,
            result: *result,
            whole_days: budget_to_days.then(|| whole_days(result.affordable_days)),
            remaining_budget: budget_to_days
                .then(|| configuration.budget - result.total_budget_used),
            maintenance,
            per_person,
            optimization_tip: result.needs_optimization_tip(configuration.mode),
        }
    }

    pub fn from_calculator(calculator: &Calculator) -> Self {
        Self::new(
            calculator.configuration(),
            calculator.result(),
            calculator.rates(),
            Utc::now(),
        )
    }

    /// Headline figure: required budget or whole affordable days.
    pub fn headline(&self) -> String {
        let config = &self.configuration;
        match config.mode {
            Mode::DaysToBudget => format!(
                "Required budget for {} days: {} ({})",
                format_count(config.desired_days),
                format_inr(self.result.required_budget_inr),
                format_usd(self.result.required_budget_usd)
            ),
            Mode::BudgetToDays => format!(
                "Estimated runtime within {} budget: {} days",
                format_inr(config.budget),
                format_count(self.whole_days.unwrap_or(0.0))
            ),
        }
    }
}

pub fn render_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

pub fn render_text(summary: &Summary) -> String {
    let config = &summary.configuration;
    let result = &summary.result;
    let multi_user = summary.per_person.is_some();
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(80)));
    out.push_str("Lab Budget Estimate\n");
    out.push_str(&format!("{}\n", "=".repeat(80)));
    out.push_str(&format!(
        "Generated: {}\n",
        summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("Mode: {}\n\n", config.mode));

    out.push_str(&format!("{}\n", config_table(config)));
    out.push('\n');
    out.push_str(&format!("{}\n", style(summary.headline()).bold()));
    if let Some(remaining) = summary.remaining_budget {
        out.push_str(&format!(
            "  Budget used: {}  Remaining: {}\n",
            format_inr(result.total_budget_used),
            format_inr(remaining)
        ));
    }
    out.push('\n');

    if let Some(pp) = &summary.per_person {
        out.push_str("Per Person Breakdown\n");
        match (config.mode, pp.required_budget_inr) {
            (Mode::DaysToBudget, Some(required)) => {
                out.push_str(&format!("  Required per person: {}\n", format_inr(required)))
            }
            _ => out.push_str(&format!(
                "  Runtime per person: {} days\n",
                format_count(summary.whole_days.unwrap_or(0.0))
            )),
        }
        out.push_str(&format!(
            "  Daily cost per person: {}\n\n",
            format_inr(pp.daily_cost_inr)
        ));
    }

    let title = if multi_user {
        format!(
            "Total Daily Cost Breakdown ({} Users)",
            format_count(config.number_of_users)
        )
    } else {
        "Daily Cost Breakdown".to_string()
    };
    out.push_str(&format!("{}\n", title));
    out.push_str(&format!("{}\n\n", breakdown_table(summary)));

    out.push_str("AWS Pricing Reference\n");
    out.push_str(&format!(
        "  EC2 ({}): ${}/hour\n",
        EC2_INSTANCE_LABEL, summary.rates.ec2_rate_usd
    ));
    out.push_str(&format!(
        "  {} Storage: ${}/GB-month\n",
        STORAGE_VOLUME_LABEL, summary.rates.storage_rate_usd
    ));

    if summary.optimization_tip {
        out.push('\n');
        out.push_str(&format!(
            "{}\n",
            style("Tip: consider fewer runtime hours per day or fewer instances to stretch the budget.")
                .yellow()
        ));
    }

    out
}

fn config_table(config: &Configuration) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Setting", "Value"]);

    let rows = [
        ("Deployment Type", config.deployment_type.display_name().to_string()),
        (
            "Runtime per Day",
            format!("{} hours", format_count(config.runtime_per_day)),
        ),
        (
            "Instances per Person",
            format_count(config.instances_per_person),
        ),
        ("Number of Users", format_count(config.number_of_users)),
        (
            "Storage per Instance",
            format!("{} GB", format_count(config.storage_per_instance)),
        ),
        ("Exchange Rate", format!("₹{}/USD", config.exchange_rate)),
        (
            "Maintenance (+25%)",
            if config.maintenance_enabled {
                "included".to_string()
            } else {
                "base AWS pricing only".to_string()
            },
        ),
    ];

    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

fn breakdown_table(summary: &Summary) -> Table {
    let config = &summary.configuration;
    let result = &summary.result;
    let users = config.number_of_users;
    let multi_user = summary.per_person.is_some();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    let mut header = vec!["Item", "INR", "USD"];
    if multi_user {
        header.push("Per Person");
    }
    table.set_header(header);

    let mut push = |label: String, inr: f64, usd: f64, total: bool| {
        let mut row = vec![
            Cell::new(label),
            Cell::new(format_inr(inr)).set_alignment(CellAlignment::Right),
            Cell::new(format_usd(usd)).set_alignment(CellAlignment::Right),
        ];
        if multi_user {
            row.push(
                Cell::new(format_inr(per_person(inr, users))).set_alignment(CellAlignment::Right),
            );
        }
        if total {
            row = row.into_iter().map(|c| c.fg(Color::Green)).collect();
        }
        table.add_row(row);
    };

    push(
        format!(
            "Instance Cost ({} × {} × {}h)",
            format_count(config.instances_per_person),
            format_count(users),
            format_count(config.runtime_per_day)
        ),
        result.instance_cost_inr,
        result.instance_cost_usd,
        false,
    );
    push(
        format!(
            "Storage Cost ({}GB × {} × {})",
            format_count(config.storage_per_instance),
            format_count(config.instances_per_person),
            format_count(users)
        ),
        result.storage_cost_inr,
        result.storage_cost_usd,
        false,
    );
    if let Some(m) = summary.maintenance {
        push("Maintenance Cost (+25%)".to_string(), m.inr, m.usd, false);
    }
    push(
        "Total Daily Cost".to_string(),
        result.daily_cost_inr,
        result.daily_cost_usd,
        true,
    );

    table
}
