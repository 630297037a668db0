//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here.
//! Trip data itself lives in the PlannerSession; this adds form focus,
//! edit buffers and overlays on top.

use std::time::Instant;

use rand::seq::IndexedRandom;
use tracing::{debug, warn};

use crate::domain::catalog::{self, MAX_TRAVELER_CHOICE};
use crate::domain::{DATE_FORMAT, DraftError, GeneratedPlan, Interest};
use crate::planner::{GenerationTicket, PlannerSession, Tab};

/// Words for the generating status line
pub const LOADING_WORDS: &[&str] = &[
    "Packing", "Charting", "Mapping", "Scouting", "Sketching", "Routing", "Wandering", "Plotting",
];

/// A focusable row on the Plan tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Destination,
    Travelers,
    StartDate,
    EndDate,
    Budget,
    Interest(Interest),
    Generate,
}

impl FormField {
    /// All rows in focus order
    pub fn all() -> Vec<FormField> {
        let mut fields = vec![Self::Destination, Self::Travelers, Self::StartDate, Self::EndDate, Self::Budget];
        fields.extend(Interest::ALL.into_iter().map(Self::Interest));
        fields.push(Self::Generate);
        fields
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Destination => "Destination",
            Self::Travelers => "Travelers",
            Self::StartDate => "Start Date",
            Self::EndDate => "End Date",
            Self::Budget => "Budget Range",
            Self::Interest(i) => i.label(),
            Self::Generate => "Generate AI Travel Plan",
        }
    }

    /// Whether the field is edited through a text buffer
    pub fn is_text(self) -> bool {
        matches!(self, Self::Destination | Self::StartDate | Self::EndDate)
    }
}

/// Text being typed into a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub field: FormField,
    pub text: String,
    /// Position in the destination suggestion cycle
    pub suggestion_index: Option<usize>,
    /// Text the suggestions are filtered by
    suggestion_query: String,
}

impl EditBuffer {
    pub fn new(field: FormField, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            field,
            suggestion_query: text.clone(),
            text,
            suggestion_index: None,
        }
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
        self.reset_suggestions();
    }

    pub fn pop(&mut self) {
        self.text.pop();
        self.reset_suggestions();
    }

    fn reset_suggestions(&mut self) {
        self.suggestion_index = None;
        self.suggestion_query = self.text.clone();
    }

    /// Destination suggestions for the text typed so far
    pub fn suggestions(&self) -> Vec<&'static str> {
        if self.field == FormField::Destination {
            catalog::suggest_destinations(&self.suggestion_query)
        } else {
            Vec::new()
        }
    }

    /// Replace the text with the next matching suggestion
    pub fn cycle_suggestion(&mut self) {
        let suggestions = self.suggestions();
        if suggestions.is_empty() {
            debug!("EditBuffer::cycle_suggestion: no suggestions");
            return;
        }
        let next = self.suggestion_index.map(|i| (i + 1) % suggestions.len()).unwrap_or(0);
        self.suggestion_index = Some(next);
        self.text = suggestions[next].to_string();
    }
}

/// Interaction mode (modal)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Typing into a text field
    Editing(EditBuffer),
    /// Help overlay
    Help,
    /// Blocking notice; any key dismisses it
    Notice(String),
}

/// Action pending execution by the runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Generate,
}

/// Selection state for list views
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    pub selected_index: usize,
}

impl SelectionState {
    pub fn select_next(&mut self, max_items: usize) {
        if max_items > 0 && self.selected_index < max_items - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

/// Main TUI application state
#[derive(Debug)]
pub struct AppState {
    /// Trip draft, generated plan and active tab
    pub planner: PlannerSession,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,
    /// Focused row on the Plan tab
    pub form_selection: SelectionState,
    /// Should the app quit
    pub should_quit: bool,
    /// Last error message (coercion failures), cleared on next key
    pub error_message: Option<String>,
    pub pending_action: Option<PendingAction>,

    // === Generation progress ===
    pub generation_started: Option<Instant>,
    pub loading_word: &'static str,

    // === Scroll offsets for read-only panels ===
    pub itinerary_scroll: u16,
    pub recommendations_scroll: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PlannerSession::default())
    }
}

impl AppState {
    pub fn new(planner: PlannerSession) -> Self {
        debug!("AppState::new: called");
        Self {
            planner,
            interaction_mode: InteractionMode::Normal,
            form_selection: SelectionState::default(),
            should_quit: false,
            error_message: None,
            pending_action: None,
            generation_started: None,
            loading_word: LOADING_WORDS[0],
            itinerary_scroll: 0,
            recommendations_scroll: 0,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.planner.active_tab()
    }

    pub fn focused_field(&self) -> FormField {
        let fields = FormField::all();
        fields[self.form_selection.selected_index.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.form_selection.select_next(FormField::all().len());
    }

    pub fn focus_prev(&mut self) {
        self.form_selection.select_prev();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "AppState::set_error");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Current display value of a form field
    pub fn field_value(&self, field: FormField) -> String {
        let draft = self.planner.draft();
        match field {
            FormField::Destination => draft.destination().to_string(),
            FormField::Travelers => catalog::travelers_label(draft.travelers()),
            FormField::StartDate => draft
                .start_date()
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            FormField::EndDate => draft
                .end_date()
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            FormField::Budget => draft.budget().label().to_string(),
            FormField::Interest(i) => if draft.has_interest(i) { "selected" } else { "" }.to_string(),
            FormField::Generate => String::new(),
        }
    }

    /// Start editing the focused field if it is a text field
    pub fn begin_edit(&mut self) {
        let field = self.focused_field();
        if field.is_text() {
            debug!(?field, "AppState::begin_edit: editing");
            self.interaction_mode = InteractionMode::Editing(EditBuffer::new(field, self.field_value(field)));
        }
    }

    /// Apply the edit buffer to the draft
    ///
    /// On a coercion error the buffer is kept open and the error is shown.
    pub fn commit_edit(&mut self) -> Result<(), DraftError> {
        let InteractionMode::Editing(buffer) = &self.interaction_mode else {
            return Ok(());
        };
        let buffer = buffer.clone();
        let draft = self.planner.draft_mut();
        let result = match buffer.field {
            FormField::Destination => {
                draft.set_destination(buffer.text.clone());
                Ok(())
            }
            FormField::StartDate => draft.set_start_date(&buffer.text),
            FormField::EndDate => draft.set_end_date(&buffer.text),
            _ => Ok(()),
        };
        match &result {
            Ok(()) => self.interaction_mode = InteractionMode::Normal,
            Err(e) => self.set_error(e.to_string()),
        }
        result
    }

    pub fn cancel_edit(&mut self) {
        debug!("AppState::cancel_edit: called");
        self.interaction_mode = InteractionMode::Normal;
    }

    /// Step the focused picker (travelers or budget) forward or backward
    pub fn adjust_focused(&mut self, forward: bool) {
        let field = self.focused_field();
        let draft = self.planner.draft_mut();
        match field {
            FormField::Travelers => {
                let current = draft.travelers().min(MAX_TRAVELER_CHOICE);
                let next = match (forward, current) {
                    (true, n) if n >= MAX_TRAVELER_CHOICE => 1,
                    (true, n) => n + 1,
                    (false, n) if n <= 1 => MAX_TRAVELER_CHOICE,
                    (false, n) => n - 1,
                };
                if let Err(e) = draft.set_travelers(next) {
                    self.set_error(e.to_string());
                }
            }
            FormField::Budget => {
                let budget = draft.budget();
                draft.set_budget(if forward { budget.next() } else { budget.prev() });
            }
            _ => debug!(?field, "AppState::adjust_focused: not a picker"),
        }
    }

    /// Toggle the focused interest, if an interest row is focused
    pub fn toggle_focused_interest(&mut self) {
        if let FormField::Interest(interest) = self.focused_field() {
            self.planner.draft_mut().toggle_interest(interest);
        }
    }

    /// Validate and mark generation as started
    ///
    /// A missing-field rejection opens the blocking notice. Returns the
    /// ticket to expand once the delay has elapsed.
    pub fn start_generation(&mut self) -> Option<GenerationTicket> {
        match self.planner.begin_generation() {
            Ok(ticket) => {
                self.generation_started = Some(Instant::now());
                self.loading_word = LOADING_WORDS.choose(&mut rand::rng()).copied().unwrap_or(LOADING_WORDS[0]);
                Some(ticket)
            }
            Err(e) if e.is_user_facing() => {
                self.interaction_mode = InteractionMode::Notice(e.notice().to_string());
                None
            }
            Err(e) => {
                debug!(error = %e, "AppState::start_generation: ignored");
                None
            }
        }
    }

    /// Commit a finished plan and reset panel scroll
    pub fn finish_generation(&mut self, plan: GeneratedPlan) {
        self.planner.complete_generation(plan);
        self.generation_started = None;
        self.itinerary_scroll = 0;
        self.recommendations_scroll = 0;
    }

    /// Close the notice overlay
    pub fn dismiss_notice(&mut self) {
        self.planner.dismiss_notice();
        self.interaction_mode = InteractionMode::Normal;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        match self.active_tab() {
            Tab::Itinerary => self.itinerary_scroll = self.itinerary_scroll.saturating_add(lines),
            Tab::Recommendations => self.recommendations_scroll = self.recommendations_scroll.saturating_add(lines),
            Tab::Plan => {}
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        match self.active_tab() {
            Tab::Itinerary => self.itinerary_scroll = self.itinerary_scroll.saturating_sub(lines),
            Tab::Recommendations => self.recommendations_scroll = self.recommendations_scroll.saturating_sub(lines),
            Tab::Plan => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BudgetTier, TripDraft};
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(PlannerSession::new(TripDraft::default(), Duration::ZERO))
    }

    fn focus(state: &mut AppState, field: FormField) {
        let idx = FormField::all().iter().position(|f| *f == field).unwrap();
        state.form_selection.selected_index = idx;
    }

    #[test]
    fn test_form_fields_order() {
        let fields = FormField::all();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[0], FormField::Destination);
        assert_eq!(fields[5], FormField::Interest(Interest::Culture));
        assert_eq!(*fields.last().unwrap(), FormField::Generate);
    }

    #[test]
    fn test_focus_clamps() {
        let mut state = state();
        state.focus_prev();
        assert_eq!(state.focused_field(), FormField::Destination);
        for _ in 0..50 {
            state.focus_next();
        }
        assert_eq!(state.focused_field(), FormField::Generate);
    }

    #[test]
    fn test_edit_destination() {
        let mut state = state();
        state.begin_edit();
        if let InteractionMode::Editing(buf) = &mut state.interaction_mode {
            for c in "Rome".chars() {
                buf.push(c);
            }
        }
        state.commit_edit().unwrap();
        assert_eq!(state.planner.draft().destination(), "Rome");
        assert_eq!(state.interaction_mode, InteractionMode::Normal);
    }

    #[test]
    fn test_invalid_date_keeps_buffer_open() {
        let mut state = state();
        focus(&mut state, FormField::StartDate);
        state.begin_edit();
        if let InteractionMode::Editing(buf) = &mut state.interaction_mode {
            buf.text = "tomorrow".to_string();
        }
        assert!(state.commit_edit().is_err());
        assert!(matches!(state.interaction_mode, InteractionMode::Editing(_)));
        assert!(state.error_message.as_deref().unwrap().contains("tomorrow"));
        assert!(state.planner.draft().start_date().is_none());
    }

    #[test]
    fn test_begin_edit_ignores_non_text_fields() {
        let mut state = state();
        focus(&mut state, FormField::Budget);
        state.begin_edit();
        assert_eq!(state.interaction_mode, InteractionMode::Normal);
    }

    #[test]
    fn test_suggestion_cycle() {
        let mut buf = EditBuffer::new(FormField::Destination, "an");
        buf.cycle_suggestion();
        assert_eq!(buf.text, "Tokyo, Japan");
        buf.cycle_suggestion();
        assert_eq!(buf.text, "Paris, France");
        buf.cycle_suggestion();
        buf.cycle_suggestion();
        assert_eq!(buf.text, "Tokyo, Japan");

        buf.pop();
        assert_eq!(buf.suggestion_index, None);
    }

    #[test]
    fn test_date_fields_have_no_suggestions() {
        let buf = EditBuffer::new(FormField::StartDate, "");
        assert!(buf.suggestions().is_empty());
    }

    #[test]
    fn test_traveler_picker_wraps() {
        let mut state = state();
        focus(&mut state, FormField::Travelers);
        state.adjust_focused(false);
        assert_eq!(state.planner.draft().travelers(), MAX_TRAVELER_CHOICE);
        state.adjust_focused(true);
        assert_eq!(state.planner.draft().travelers(), 1);
        state.adjust_focused(true);
        assert_eq!(state.field_value(FormField::Travelers), "2 Travelers");
    }

    #[test]
    fn test_budget_picker() {
        let mut state = state();
        focus(&mut state, FormField::Budget);
        state.adjust_focused(true);
        assert_eq!(state.planner.draft().budget(), BudgetTier::Luxury);
        state.adjust_focused(false);
        state.adjust_focused(false);
        assert_eq!(state.planner.draft().budget(), BudgetTier::Budget);
    }

    #[test]
    fn test_toggle_focused_interest() {
        let mut state = state();
        focus(&mut state, FormField::Interest(Interest::Nature));
        state.toggle_focused_interest();
        assert!(state.planner.draft().has_interest(Interest::Nature));
        state.toggle_focused_interest();
        assert!(!state.planner.draft().has_interest(Interest::Nature));
    }

    #[test]
    fn test_start_generation_missing_fields_opens_notice() {
        let mut state = state();
        assert!(state.start_generation().is_none());
        assert_eq!(
            state.interaction_mode,
            InteractionMode::Notice("Please fill in destination and dates".to_string())
        );
        assert!(state.generation_started.is_none());

        state.dismiss_notice();
        assert_eq!(state.interaction_mode, InteractionMode::Normal);
        assert!(state.planner.notice().is_none());
    }

    #[test]
    fn test_generation_lifecycle() {
        let mut state = state();
        {
            let draft = state.planner.draft_mut();
            draft.set_destination("Rome, Italy");
            draft.set_start_date("2024-06-01").unwrap();
            draft.set_end_date("2024-06-04").unwrap();
        }

        let ticket = state.start_generation().unwrap();
        assert!(state.generation_started.is_some());
        assert!(LOADING_WORDS.contains(&state.loading_word));
        // Second request while running is ignored without a notice
        assert!(state.start_generation().is_none());
        assert_eq!(state.interaction_mode, InteractionMode::Normal);

        state.itinerary_scroll = 5;
        state.finish_generation(ticket.build());
        assert_eq!(state.active_tab(), Tab::Itinerary);
        assert_eq!(state.itinerary_scroll, 0);
        assert!(!state.planner.is_generating());
    }
}
