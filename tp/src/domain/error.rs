//! Draft coercion errors

use thiserror::Error;

/// Errors raised when a form value cannot be coerced into its draft field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid traveler count '{0}', expected a positive integer")]
    InvalidTravelers(String),

    #[error("Unknown budget tier '{0}'. Use: budget, medium, or luxury")]
    UnknownBudgetTier(String),

    #[error("Unknown interest '{0}'. Use: culture, adventure, food, nightlife, nature, or shopping")]
    UnknownInterest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_echo_input() {
        assert!(DraftError::InvalidDate("06/01".to_string()).to_string().contains("06/01"));
        assert!(
            DraftError::InvalidTravelers("zero".to_string())
                .to_string()
                .contains("positive integer")
        );
    }
}
