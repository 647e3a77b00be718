//! Deployment presets
//!
//! A deployment type only seeds `instances_per_person`. Picking one overwrites
//! the instance count once; the count stays editable afterward.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentType {
    Standalone,
    NonClustered,
    #[default]
    Clustered,
}

impl DeploymentType {
    pub const ALL: [DeploymentType; 3] = [
        DeploymentType::Standalone,
        DeploymentType::NonClustered,
        DeploymentType::Clustered,
    ];

    /// Instance count written into the configuration when this type is picked
    pub fn default_instances(self) -> f64 {
        match self {
            DeploymentType::Standalone => 1.0,
            DeploymentType::NonClustered => 4.0,
            DeploymentType::Clustered => 9.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeploymentType::Standalone => "standalone",
            DeploymentType::NonClustered => "non-clustered",
            DeploymentType::Clustered => "clustered",
        }
    }

    /// Label used in printed summaries ("Non clustered")
    pub fn display_name(self) -> &'static str {
        match self {
            DeploymentType::Standalone => "Standalone",
            DeploymentType::NonClustered => "Non clustered",
            DeploymentType::Clustered => "Clustered",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DeploymentType::Standalone => "Single instance deployment for basic testing",
            DeploymentType::NonClustered => {
                "Multiple instances without clustering for medium workloads"
            }
            DeploymentType::Clustered => {
                "Full clustered deployment for production-like environments"
            }
        }
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "standalone" => Ok(DeploymentType::Standalone),
            "non-clustered" | "nonclustered" => Ok(DeploymentType::NonClustered),
            "clustered" => Ok(DeploymentType::Clustered),
            other => Err(format!(
                "unknown deployment type '{}' (expected standalone, non-clustered or clustered)",
                other
            )),
        }
    }
}
