//! Planner - validation, plan generation and the session state holder
//!
//! ```text
//! TripDraft → begin_generation → GenerationTicket → (delay) → build → complete_generation
//!                   ↓ missing fields
//!              notice, no state change
//! ```

mod error;
pub mod generator;
mod session;

pub use error::{MISSING_FIELDS_NOTICE, PlannerError};
pub use generator::{GenerationTicket, generate_plan, trip_duration_days};
pub use session::{DEFAULT_GENERATION_DELAY, PlannerSession, Tab};
