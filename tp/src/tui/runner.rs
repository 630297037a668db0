//! TUI Runner - main loop that owns the terminal
//!
//! The TuiRunner is responsible for:
//! - Dispatching terminal events to App
//! - Rendering on every event
//! - Running the delayed plan generation in a background task

use eyre::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::GeneratedPlan;
use crate::planner::PlannerSession;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::state::PendingAction;
use super::views;

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Event handler
    event_handler: EventHandler,
    /// Receiver for the plan produced by the background generation task
    generation_rx: Option<mpsc::Receiver<GeneratedPlan>>,
    /// Handle to the background generation task
    generation_task: Option<JoinHandle<()>>,
}

impl TuiRunner {
    /// Create a new TuiRunner from configuration
    pub fn new(terminal: Tui, config: &Config) -> Self {
        debug!("TuiRunner::new: called");
        let planner = PlannerSession::new(config.initial_draft(), config.generation.delay());
        Self {
            app: App::new(planner),
            terminal,
            event_handler: EventHandler::new(config.tui.tick_rate()),
            generation_rx: None,
            generation_task: None,
        }
    }

    /// Run the main loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        debug!("TuiRunner::run: entering main loop");
        loop {
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            tokio::select! {
                event = self.event_handler.next() => {
                    match event? {
                        Event::Tick => {}
                        Event::Key(key_event) => {
                            if self.app.handle_key(key_event) {
                                break;
                            }
                        }
                        Event::Resize(width, height) => {
                            debug!(width, height, "TuiRunner::run: resize");
                        }
                    }
                }
                // Commit the plan as soon as the background task delivers it
                Some(plan) = async {
                    if let Some(rx) = &mut self.generation_rx {
                        rx.recv().await
                    } else {
                        std::future::pending::<Option<GeneratedPlan>>().await
                    }
                } => {
                    self.finish_generation(plan);
                }
            }

            if let Some(action) = self.app.state_mut().pending_action.take() {
                self.execute_action(action);
            }

            if self.app.state().should_quit {
                debug!("TuiRunner::run: should_quit is true, breaking");
                break;
            }
        }

        if let Some(task) = self.generation_task.take() {
            task.abort();
        }
        debug!("TuiRunner::run: exiting");
        Ok(())
    }

    fn execute_action(&mut self, action: PendingAction) {
        debug!(?action, "TuiRunner::execute_action: called");
        match action {
            PendingAction::Generate => self.start_generation(),
        }
    }

    /// Validate the draft and spawn the delayed build
    fn start_generation(&mut self) {
        let Some(ticket) = self.app.state_mut().start_generation() else {
            return;
        };
        let delay = self.app.state().planner.generation_delay();
        let (tx, rx) = mpsc::channel(1);

        info!(?delay, "TuiRunner::start_generation: spawning generation task");
        self.generation_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let plan = ticket.build();
            if tx.send(plan).await.is_err() {
                debug!("TuiRunner: generation receiver dropped");
            }
        }));
        self.generation_rx = Some(rx);
    }

    fn finish_generation(&mut self, plan: GeneratedPlan) {
        debug!(destination = %plan.destination, "TuiRunner::finish_generation: called");
        self.app.state_mut().finish_generation(plan);
        self.generation_rx = None;
        self.generation_task = None;
    }
}
