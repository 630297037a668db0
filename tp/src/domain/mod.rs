//! Domain types for the trip planner
//!
//! TripDraft is the mutable form record; GeneratedPlan is the immutable
//! output of a generation. Budget tiers, interests and the destination
//! catalog are the fixed option lists the form offers.

mod budget;
pub mod catalog;
mod draft;
mod error;
mod interest;
mod plan;

pub use budget::BudgetTier;
pub use draft::{DATE_FORMAT, RequiredField, TripDraft};
pub use error::DraftError;
pub use interest::Interest;
pub use plan::{Activity, ActivityKind, DayPlan, GeneratedPlan, Hotel, Recommendations, Restaurant};
