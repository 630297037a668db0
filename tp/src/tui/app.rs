//! TUI application - event handling and state management
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use crate::planner::{PlannerSession, Tab};

use super::state::{AppState, FormField, InteractionMode, PendingAction};

/// TUI application
#[derive(Debug, Default)]
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create a new application instance around a planner session
    pub fn new(planner: PlannerSession) -> Self {
        debug!("App::new: called");
        Self {
            state: AppState::new(planner),
        }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        trace!("App::state: called");
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        trace!("App::state_mut: called");
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_key: called");
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            debug!("App::handle_key: Ctrl+C force quit");
            return true;
        }

        match &self.state.interaction_mode {
            InteractionMode::Normal => {
                // Clear any transient error message on key press
                self.state.clear_error();
                self.handle_normal_key(key)
            }
            InteractionMode::Editing(_) => self.handle_editing_key(key),
            InteractionMode::Help => self.handle_help_key(key),
            InteractionMode::Notice(_) => {
                debug!("App::handle_key: dismissing notice");
                self.state.dismiss_notice();
                false
            }
        }
    }

    /// Handle key in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_normal_key: called");
        match key.code {
            KeyCode::Char('q') => {
                debug!("App::handle_normal_key: quit requested");
                self.state.should_quit = true;
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.state.interaction_mode = InteractionMode::Help;
            }

            // === Tab switching ===
            KeyCode::Tab => self.state.planner.next_tab(),
            KeyCode::BackTab => self.state.planner.prev_tab(),
            KeyCode::Char(c @ '1'..='3') => {
                if let Some(tab) = c.to_digit(10).and_then(Tab::from_number) {
                    self.state.planner.select_tab(tab);
                }
            }

            _ => match self.state.active_tab() {
                Tab::Plan => self.handle_form_key(key),
                Tab::Itinerary | Tab::Recommendations => self.handle_panel_key(key),
            },
        }
        false
    }

    /// Handle key on the Plan tab form
    fn handle_form_key(&mut self, key: KeyEvent) {
        debug!(?key, "App::handle_form_key: called");
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.focus_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.focus_next(),
            KeyCode::Left | KeyCode::Char('h') => self.state.adjust_focused(false),
            KeyCode::Right | KeyCode::Char('l') => self.state.adjust_focused(true),
            KeyCode::Char(' ') => self.state.toggle_focused_interest(),
            KeyCode::Char('g') => self.request_generation(),
            KeyCode::Enter => match self.state.focused_field() {
                field if field.is_text() => self.state.begin_edit(),
                FormField::Travelers | FormField::Budget => self.state.adjust_focused(true),
                FormField::Interest(_) => self.state.toggle_focused_interest(),
                FormField::Generate => self.request_generation(),
                _ => {}
            },
            _ => trace!(?key, "App::handle_form_key: unbound"),
        }
    }

    /// Handle key on the read-only itinerary and recommendations panels
    fn handle_panel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(1),
            KeyCode::PageUp => self.state.scroll_up(10),
            KeyCode::PageDown => self.state.scroll_down(10),
            _ => trace!(?key, "App::handle_panel_key: unbound"),
        }
    }

    /// Queue a generation for the runner; ignored while one is running
    fn request_generation(&mut self) {
        if self.state.planner.is_generating() {
            debug!("App::request_generation: already generating, ignoring");
            return;
        }
        debug!("App::request_generation: queued");
        self.state.pending_action = Some(PendingAction::Generate);
    }

    /// Handle key while typing into a text field
    fn handle_editing_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_editing_key: called");
        match key.code {
            KeyCode::Esc => self.state.cancel_edit(),
            KeyCode::Enter => {
                // Errors are shown in the footer and the buffer stays open
                let _ = self.state.commit_edit();
            }
            code => {
                self.state.clear_error();
                if let InteractionMode::Editing(buffer) = &mut self.state.interaction_mode {
                    match code {
                        KeyCode::Backspace => buffer.pop(),
                        KeyCode::Tab => buffer.cycle_suggestion(),
                        KeyCode::Char(c) => buffer.push(c),
                        _ => {}
                    }
                }
            }
        }
        false
    }

    /// Handle key in help overlay
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_help_key: called");
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter | KeyCode::F(1)
        ) {
            self.state.interaction_mode = InteractionMode::Normal;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Interest, TripDraft};
    use std::time::Duration;

    fn app() -> App {
        App::new(PlannerSession::new(TripDraft::default(), Duration::ZERO))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_q_sets_should_quit() {
        let mut app = app();
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_tab_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().active_tab(), Tab::Itinerary);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state().active_tab(), Tab::Recommendations);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.state().active_tab(), Tab::Itinerary);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.state().active_tab(), Tab::Plan);
    }

    #[test]
    fn test_fill_form_and_generate() {
        let mut app = app();

        // Destination
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Rome, Italy");
        press(&mut app, KeyCode::Enter);

        // Travelers: 1 -> 2
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);

        // Start date
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "2024-06-01");
        press(&mut app, KeyCode::Enter);

        // End date
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "2024-06-04");
        press(&mut app, KeyCode::Enter);

        // First interest
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));

        let draft = app.state().planner.draft();
        assert_eq!(draft.destination(), "Rome, Italy");
        assert_eq!(draft.travelers(), 2);
        assert!(draft.has_interest(Interest::Culture));

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.state().pending_action, Some(PendingAction::Generate));
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Nowhere");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().planner.draft().destination(), "");
        assert_eq!(app.state().interaction_mode, InteractionMode::Normal);
    }

    #[test]
    fn test_typing_q_while_editing_does_not_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Iqaluit");
        assert!(!app.state().should_quit);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().planner.draft().destination(), "Iqaluit");
    }

    #[test]
    fn test_tab_completes_destination_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "rom");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().planner.draft().destination(), "Rome, Italy");
        assert_eq!(app.state().active_tab(), Tab::Plan);
    }

    #[test]
    fn test_notice_dismissed_by_any_key() {
        let mut app = app();
        app.state_mut().start_generation();
        assert!(matches!(app.state().interaction_mode, InteractionMode::Notice(_)));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state().interaction_mode, InteractionMode::Normal);
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.state().interaction_mode, InteractionMode::Help);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().interaction_mode, InteractionMode::Normal);
    }

    #[test]
    fn test_panel_scroll() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state().itinerary_scroll, 2);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.state().itinerary_scroll, 0);
    }
}
