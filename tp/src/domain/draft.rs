//! TripDraft - the mutable trip parameters edited on the form
//!
//! Setters coerce their input and nothing more. Whether the draft is complete
//! enough to generate from is decided by the plan generator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::budget::BudgetTier;
use super::error::DraftError;
use super::interest::Interest;

/// Date format accepted by the date setters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fields that must be filled before a plan can be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Destination,
    StartDate,
    EndDate,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Destination => write!(f, "destination"),
            Self::StartDate => write!(f, "start date"),
            Self::EndDate => write!(f, "end date"),
        }
    }
}

/// Trip parameters collected by the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDraft {
    destination: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    travelers: u32,
    budget: BudgetTier,
    /// Selected interests, in the order they were selected
    interests: Vec<Interest>,
}

impl Default for TripDraft {
    fn default() -> Self {
        Self::new(1, BudgetTier::default())
    }
}

impl TripDraft {
    /// Create an empty draft with the given traveler count and budget tier
    pub fn new(travelers: u32, budget: BudgetTier) -> Self {
        debug!(travelers, %budget, "TripDraft::new: called");
        Self {
            destination: String::new(),
            start_date: None,
            end_date: None,
            travelers: travelers.max(1),
            budget,
            interests: Vec::new(),
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn travelers(&self) -> u32 {
        self.travelers
    }

    pub fn budget(&self) -> BudgetTier {
        self.budget
    }

    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
        debug!(destination = %self.destination, "TripDraft::set_destination: updated");
    }

    /// Set the start date from form text; empty text clears it
    pub fn set_start_date(&mut self, text: &str) -> Result<(), DraftError> {
        self.start_date = parse_date(text)?;
        debug!(start_date = ?self.start_date, "TripDraft::set_start_date: updated");
        Ok(())
    }

    /// Set the end date from form text; empty text clears it
    pub fn set_end_date(&mut self, text: &str) -> Result<(), DraftError> {
        self.end_date = parse_date(text)?;
        debug!(end_date = ?self.end_date, "TripDraft::set_end_date: updated");
        Ok(())
    }

    pub fn set_travelers(&mut self, travelers: u32) -> Result<(), DraftError> {
        if travelers == 0 {
            return Err(DraftError::InvalidTravelers(travelers.to_string()));
        }
        self.travelers = travelers;
        debug!(travelers, "TripDraft::set_travelers: updated");
        Ok(())
    }

    /// Set the traveler count from form text
    pub fn set_travelers_from_str(&mut self, text: &str) -> Result<(), DraftError> {
        let travelers = text
            .trim()
            .parse::<u32>()
            .map_err(|_| DraftError::InvalidTravelers(text.to_string()))?;
        self.set_travelers(travelers)
    }

    pub fn set_budget(&mut self, budget: BudgetTier) {
        self.budget = budget;
        debug!(%budget, "TripDraft::set_budget: updated");
    }

    /// Flip membership of an interest: add if absent, remove if present
    pub fn toggle_interest(&mut self, interest: Interest) {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
            debug!(%interest, "TripDraft::toggle_interest: removed");
        } else {
            self.interests.push(interest);
            debug!(%interest, "TripDraft::toggle_interest: added");
        }
    }

    /// Required fields that are still empty, in form order
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.destination.is_empty() {
            missing.push(RequiredField::Destination);
        }
        if self.start_date.is_none() {
            missing.push(RequiredField::StartDate);
        }
        if self.end_date.is_none() {
            missing.push(RequiredField::EndDate);
        }
        missing
    }
}

fn parse_date(text: &str) -> Result<Option<NaiveDate>, DraftError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| DraftError::InvalidDate(text.to_string()))
}
