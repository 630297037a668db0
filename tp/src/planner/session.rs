//! PlannerSession - the single state holder behind every surface
//!
//! Holds the draft, the last generated plan, the active tab and the
//! in-progress flag. The TUI and the `generate` command both drive it.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::{GeneratedPlan, TripDraft};

use super::error::PlannerError;
use super::generator::{self, GenerationTicket};

/// Default artificial delay between invoking generation and committing the plan
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(1200);

/// The three panels of the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Trip parameter form
    #[default]
    Plan,
    /// Day-by-day itinerary
    Itinerary,
    /// Hotels and restaurants
    Recommendations,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Self::Plan, Self::Itinerary, Self::Recommendations];

    pub fn title(self) -> &'static str {
        match self {
            Self::Plan => "Plan Trip",
            Self::Itinerary => "Itinerary",
            Self::Recommendations => "Recommendations",
        }
    }

    /// Next tab, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Plan => Self::Itinerary,
            Self::Itinerary => Self::Recommendations,
            Self::Recommendations => Self::Plan,
        }
    }

    /// Previous tab, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Plan => Self::Recommendations,
            Self::Itinerary => Self::Plan,
            Self::Recommendations => Self::Itinerary,
        }
    }

    /// Tab for a 1-based number key
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::Plan),
            2 => Some(Self::Itinerary),
            3 => Some(Self::Recommendations),
            _ => None,
        }
    }

    /// Heading and hint shown when this tab has nothing to display yet
    pub fn empty_state(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Plan => None,
            Self::Itinerary => Some((
                "No itinerary yet",
                "Generate your travel plan first to see your itinerary",
            )),
            Self::Recommendations => Some((
                "No recommendations yet",
                "Generate your travel plan first to see personalized recommendations",
            )),
        }
    }
}

/// In-session planner state
#[derive(Debug, Clone)]
pub struct PlannerSession {
    draft: TripDraft,
    plan: Option<GeneratedPlan>,
    active_tab: Tab,
    generating: bool,
    notice: Option<String>,
    generation_delay: Duration,
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self::new(TripDraft::default(), DEFAULT_GENERATION_DELAY)
    }
}

impl PlannerSession {
    pub fn new(draft: TripDraft, generation_delay: Duration) -> Self {
        debug!(?generation_delay, "PlannerSession::new: called");
        Self {
            draft,
            plan: None,
            active_tab: Tab::default(),
            generating: false,
            notice: None,
            generation_delay,
        }
    }

    pub fn draft(&self) -> &TripDraft {
        &self.draft
    }

    /// Field-level access for the form
    pub fn draft_mut(&mut self) -> &mut TripDraft {
        &mut self.draft
    }

    /// The last generated plan, if any generation has completed
    pub fn plan(&self) -> Option<&GeneratedPlan> {
        self.plan.as_ref()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn generation_delay(&self) -> Duration {
        self.generation_delay
    }

    /// Pending validation notice, if the last generate attempt was rejected
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Switch to a tab. Returns false if it was already active.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            debug!(?tab, "PlannerSession::select_tab: already active");
            return false;
        }
        debug!(from = ?self.active_tab, to = ?tab, "PlannerSession::select_tab: switching");
        self.active_tab = tab;
        true
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    /// Validate the draft and mark a generation as in progress
    ///
    /// On a missing field the notice is set and nothing else changes.
    pub fn begin_generation(&mut self) -> Result<GenerationTicket, PlannerError> {
        debug!(generating = self.generating, "PlannerSession::begin_generation: called");
        if self.generating {
            warn!("PlannerSession::begin_generation: generation already in progress");
            return Err(PlannerError::GenerationInProgress);
        }

        match generator::prepare(&self.draft) {
            Ok(ticket) => {
                self.notice = None;
                self.generating = true;
                info!(
                    destination = %ticket.draft().destination(),
                    "PlannerSession::begin_generation: generation started"
                );
                Ok(ticket)
            }
            Err(e) => {
                debug!(error = %e, "PlannerSession::begin_generation: validation failed");
                self.notice = Some(e.notice().to_string());
                Err(e)
            }
        }
    }

    /// Store a finished plan, replacing any previous one, and show the itinerary
    pub fn complete_generation(&mut self, plan: GeneratedPlan) -> &GeneratedPlan {
        info!(
            destination = %plan.destination,
            duration_days = plan.duration_days,
            "PlannerSession::complete_generation: committing plan"
        );
        self.generating = false;
        self.active_tab = Tab::Itinerary;
        self.plan.insert(plan)
    }

    /// Run a whole generation: validate, wait out the delay, commit
    pub async fn generate(&mut self) -> Result<&GeneratedPlan, PlannerError> {
        let ticket = self.begin_generation()?;
        tokio::time::sleep(self.generation_delay).await;
        Ok(self.complete_generation(ticket.build()))
    }
}
