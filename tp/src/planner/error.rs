//! Plan generation error types

use thiserror::Error;

use crate::domain::RequiredField;

/// Notice shown to the user when required fields are empty
pub const MISSING_FIELDS_NOTICE: &str = "Please fill in destination and dates";

/// Errors that can occur when starting a generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("Please fill in destination and dates (missing: {})", join_fields(.0))]
    MissingRequiredFields(Vec<RequiredField>),

    #[error("A plan is already being generated")]
    GenerationInProgress,
}

impl PlannerError {
    /// Whether this error should be surfaced to the user as a blocking notice
    pub fn is_user_facing(&self) -> bool {
        matches!(self, PlannerError::MissingRequiredFields(_))
    }

    /// Short notice text for display
    pub fn notice(&self) -> &'static str {
        match self {
            PlannerError::MissingRequiredFields(_) => MISSING_FIELDS_NOTICE,
            PlannerError::GenerationInProgress => "Generation already in progress",
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = PlannerError::MissingRequiredFields(vec![RequiredField::Destination, RequiredField::EndDate]);
        assert_eq!(
            err.to_string(),
            "Please fill in destination and dates (missing: destination, end date)"
        );
        assert!(err.is_user_facing());
        assert_eq!(err.notice(), MISSING_FIELDS_NOTICE);
    }

    #[test]
    fn test_in_progress_not_user_facing() {
        assert!(!PlannerError::GenerationInProgress.is_user_facing());
    }
}
