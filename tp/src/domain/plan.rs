//! GeneratedPlan domain type
//!
//! The immutable output of one generation: itinerary plus recommendations.
//! A new generation replaces the whole value; nothing is patched in place.

use serde::{Deserialize, Serialize};

/// Category of a scheduled activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Transport,
    Culture,
    Food,
    Adventure,
    Nature,
}

impl ActivityKind {
    /// Glyph shown next to the activity in the itinerary panel
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Transport => "✈",
            Self::Culture => "◉",
            Self::Food => "☕",
            Self::Adventure => "▲",
            Self::Nature => "❦",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Culture => write!(f, "culture"),
            Self::Food => write!(f, "food"),
            Self::Adventure => write!(f, "adventure"),
            Self::Nature => write!(f, "nature"),
        }
    }
}

/// One scheduled activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Display time label, e.g. "10:00 AM"
    pub time: String,
    pub description: String,
    pub kind: ActivityKind,
}

impl Activity {
    pub fn new(time: impl Into<String>, description: impl Into<String>, kind: ActivityKind) -> Self {
        Self {
            time: time.into(),
            description: description.into(),
            kind,
        }
    }
}

/// Activities for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day index
    pub day: u32,
    pub title: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub rating: f64,
    /// Display price, e.g. "$180/night"
    pub nightly_price: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    /// Dollar-sign price tier, e.g. "$$"
    pub price_tier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub hotels: Vec<Hotel>,
    pub restaurants: Vec<Restaurant>,
}

/// Output of a successful generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub destination: String,
    pub duration_days: u32,
    pub daily_budget: u32,
    pub itinerary: Vec<DayPlan>,
    pub recommendations: Recommendations,
}

impl GeneratedPlan {
    /// Estimated cost of the whole trip
    ///
    /// Computed in u64; the duration has no upper bound.
    pub fn total_budget(&self) -> u64 {
        u64::from(self.duration_days) * u64::from(self.daily_budget)
    }

    /// Headline shown above the itinerary
    pub fn headline(&self) -> String {
        format!("Your {}-Day Trip to {}", self.duration_days, self.destination)
    }
}
