//! Budget tiers and their fixed daily rates

use serde::{Deserialize, Serialize};

use super::error::DraftError;

/// Budget category selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    #[default]
    Medium,
    Luxury,
}

impl BudgetTier {
    /// All tiers in display order
    pub const ALL: [BudgetTier; 3] = [Self::Budget, Self::Medium, Self::Luxury];

    /// Daily budget in dollars used by the plan generator
    pub fn daily_rate(self) -> u32 {
        match self {
            Self::Budget => 75,
            Self::Medium => 175,
            Self::Luxury => 350,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Medium => "Medium",
            Self::Luxury => "Luxury",
        }
    }

    /// Advertised spending range shown next to the label
    pub fn range(self) -> &'static str {
        match self {
            Self::Budget => "$50-100/day",
            Self::Medium => "$100-250/day",
            Self::Luxury => "$250+/day",
        }
    }

    /// Next tier, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Budget => Self::Medium,
            Self::Medium => Self::Luxury,
            Self::Luxury => Self::Budget,
        }
    }

    /// Previous tier, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Budget => Self::Luxury,
            Self::Medium => Self::Budget,
            Self::Luxury => Self::Medium,
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budget => write!(f, "budget"),
            Self::Medium => write!(f, "medium"),
            Self::Luxury => write!(f, "luxury"),
        }
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "medium" => Ok(Self::Medium),
            "luxury" => Ok(Self::Luxury),
            _ => Err(DraftError::UnknownBudgetTier(s.to_string())),
        }
    }
}
