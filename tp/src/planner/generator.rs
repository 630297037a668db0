//! Plan generator
//!
//! Validates a draft and expands the fixed itinerary template. Only the
//! destination, the date range and the budget tier feed into the output;
//! interests and traveler count are collected but not consulted.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::{
    Activity, ActivityKind, DayPlan, GeneratedPlan, Hotel, Recommendations, RequiredField, Restaurant, TripDraft,
};

use super::error::PlannerError;

/// Trip length in days, never less than one
///
/// Same-day and inverted ranges both yield a one-day trip.
pub fn trip_duration_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days().max(1);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// A validated draft snapshot, ready to be expanded into a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    snapshot: TripDraft,
    start: NaiveDate,
    end: NaiveDate,
}

impl GenerationTicket {
    /// The draft as it was when generation started
    pub fn draft(&self) -> &TripDraft {
        &self.snapshot
    }

    pub fn duration_days(&self) -> u32 {
        trip_duration_days(self.start, self.end)
    }

    /// Expand the template for this snapshot
    pub fn build(&self) -> GeneratedPlan {
        let plan = GeneratedPlan {
            destination: self.snapshot.destination().to_string(),
            duration_days: self.duration_days(),
            daily_budget: self.snapshot.budget().daily_rate(),
            itinerary: itinerary_template(),
            recommendations: recommendations_template(),
        };
        info!(
            destination = %plan.destination,
            duration_days = plan.duration_days,
            daily_budget = plan.daily_budget,
            "GenerationTicket::build: plan generated"
        );
        plan
    }
}

/// Check the required fields and snapshot the draft
pub fn prepare(draft: &TripDraft) -> Result<GenerationTicket, PlannerError> {
    debug!(destination = %draft.destination(), "prepare: called");
    match (draft.start_date(), draft.end_date()) {
        (Some(start), Some(end)) if !draft.destination().is_empty() => Ok(GenerationTicket {
            snapshot: draft.clone(),
            start,
            end,
        }),
        _ => {
            let missing: Vec<RequiredField> = draft.missing_fields();
            debug!(?missing, "prepare: required fields missing");
            Err(PlannerError::MissingRequiredFields(missing))
        }
    }
}

/// Validate and build in one step, without any delay
pub fn generate_plan(draft: &TripDraft) -> Result<GeneratedPlan, PlannerError> {
    prepare(draft).map(|ticket| ticket.build())
}

fn day(day: u32, title: &str, activities: [(&str, &str, ActivityKind); 3]) -> DayPlan {
    DayPlan {
        day,
        title: title.to_string(),
        activities: activities
            .into_iter()
            .map(|(time, description, kind)| Activity::new(time, description, kind))
            .collect(),
    }
}

/// The three-day itinerary every plan gets
pub fn itinerary_template() -> Vec<DayPlan> {
    use ActivityKind::*;
    vec![
        day(
            1,
            "Arrival & City Exploration",
            [
                ("10:00 AM", "Airport pickup and hotel check-in", Transport),
                ("2:00 PM", "Walking tour of historic district", Culture),
                ("7:00 PM", "Welcome dinner at local restaurant", Food),
            ],
        ),
        day(
            2,
            "Cultural Immersion",
            [
                ("9:00 AM", "Visit famous museum", Culture),
                ("1:00 PM", "Local market food tour", Food),
                ("6:00 PM", "Traditional performance show", Culture),
            ],
        ),
        day(
            3,
            "Adventure Day",
            [
                ("8:00 AM", "Day trip to nearby attractions", Adventure),
                ("12:00 PM", "Scenic lunch with views", Nature),
                ("4:00 PM", "Return to city", Transport),
            ],
        ),
    ]
}

/// Hotels and restaurants every plan recommends
pub fn recommendations_template() -> Recommendations {
    let hotel = |name: &str, rating: f64, price: &str, features: &[&str]| Hotel {
        name: name.to_string(),
        rating,
        nightly_price: price.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    };
    let restaurant = |name: &str, cuisine: &str, rating: f64, price_tier: &str| Restaurant {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        rating,
        price_tier: price_tier.to_string(),
    };

    Recommendations {
        hotels: vec![
            hotel("Grand Plaza Hotel", 4.8, "$180/night", &["WiFi", "Pool", "Gym"]),
            hotel("Boutique Central", 4.5, "$120/night", &["WiFi", "Restaurant", "Spa"]),
        ],
        restaurants: vec![
            restaurant("Local Flavors", "Traditional", 4.7, "$$"),
            restaurant("Modern Bistro", "International", 4.6, "$$$"),
        ],
    }
}
