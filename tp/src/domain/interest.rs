//! Interest tags offered on the form

use serde::{Deserialize, Serialize};

use super::error::DraftError;

/// A selectable interest tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Culture,
    Adventure,
    Food,
    Nightlife,
    Nature,
    Shopping,
}

impl Interest {
    /// All interests in display order
    pub const ALL: [Interest; 6] = [
        Self::Culture,
        Self::Adventure,
        Self::Food,
        Self::Nightlife,
        Self::Nature,
        Self::Shopping,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Culture => "culture",
            Self::Adventure => "adventure",
            Self::Food => "food",
            Self::Nightlife => "nightlife",
            Self::Nature => "nature",
            Self::Shopping => "shopping",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Culture => "Culture & History",
            Self::Adventure => "Adventure",
            Self::Food => "Food & Dining",
            Self::Nightlife => "Nightlife",
            Self::Nature => "Nature",
            Self::Shopping => "Shopping",
        }
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Interest {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.id() == needle)
            .ok_or_else(|| DraftError::UnknownInterest(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for interest in Interest::ALL {
            assert_eq!(interest.id().parse::<Interest>().unwrap(), interest);
        }
    }

    #[test]
    fn test_unknown_interest() {
        assert!(matches!("golf".parse::<Interest>(), Err(DraftError::UnknownInterest(_))));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Interest::Culture.label(), "Culture & History");
        assert_eq!(Interest::Food.label(), "Food & Dining");
    }
}
