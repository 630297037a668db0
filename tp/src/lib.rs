//! Trip Planner - collect trip parameters and generate a sample itinerary
//!
//! A single planner session holds the trip draft being edited, the last
//! generated plan and the active view. The interactive TUI and the
//! `generate` command both drive the same session.
//!
//! # Modules
//!
//! - [`domain`] - TripDraft, GeneratedPlan and the fixed option lists
//! - [`planner`] - validation, the itinerary template and the session
//! - [`tui`] - three-tab terminal interface
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod planner;
pub mod report;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use domain::{BudgetTier, DraftError, GeneratedPlan, Interest, RequiredField, TripDraft};
pub use planner::{GenerationTicket, PlannerError, PlannerSession, Tab, generate_plan, trip_duration_days};
