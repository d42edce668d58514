use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Subscription tier of an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    #[default]
    Os,
    Professional,
    Enterprise,
}

impl PlanId {
    pub fn all_variants() -> &'static [PlanId] {
        &[PlanId::Os, PlanId::Professional, PlanId::Enterprise]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PlanId::Os => "Basic",
            PlanId::Professional => "Professional",
            PlanId::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanId::Os => write!(f, "os"),
            PlanId::Professional => write!(f, "professional"),
            PlanId::Enterprise => write!(f, "enterprise"),
        }
    }
}

impl FromStr for PlanId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "os" | "basic" => Ok(PlanId::Os),
            "professional" => Ok(PlanId::Professional),
            "enterprise" => Ok(PlanId::Enterprise),
            _ => Err(format!("Unknown plan: {s}")),
        }
    }
}

/// Optional product add-ons billed on top of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddonId {
    Configure,
    Monitor,
    Troubleshoot,
}

impl AddonId {
    pub fn all_variants() -> &'static [AddonId] {
        &[AddonId::Configure, AddonId::Monitor, AddonId::Troubleshoot]
    }

    /// Monitoring needs at least the Professional plan.
    pub fn is_eligible(self, plan: PlanId) -> bool {
        match self {
            AddonId::Configure | AddonId::Troubleshoot => true,
            AddonId::Monitor => plan != PlanId::Os,
        }
    }
}

impl fmt::Display for AddonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddonId::Configure => write!(f, "configure"),
            AddonId::Monitor => write!(f, "monitor"),
            AddonId::Troubleshoot => write!(f, "troubleshoot"),
        }
    }
}
