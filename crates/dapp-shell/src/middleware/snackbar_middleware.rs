//! Snackbar Middleware
//!
//! Auto-close timer for the snackbar. Remembers when the snackbar was last
//! opened and dispatches `Snackbar::Close` on the first tick after its
//! cooldown has elapsed.

use crate::actions::{Action, GlobalAction, SnackbarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::time::{Duration, Instant};

pub struct SnackbarMiddleware {
    enabled: bool,
    opened_at: Option<Instant>,
}

impl SnackbarMiddleware {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            opened_at: None,
        }
    }

    fn handle_at(
        &mut self,
        action: &Action,
        state: &AppState,
        dispatcher: &Dispatcher,
        now: Instant,
    ) -> bool {
        match action {
            Action::Snackbar(SnackbarAction::Open { .. }) => {
                self.opened_at = Some(now);
            }
            Action::Snackbar(SnackbarAction::Close) => {
                self.opened_at = None;
            }
            Action::Global(GlobalAction::Tick) if self.enabled && state.snackbar.open => {
                if let Some(opened_at) = self.opened_at {
                    let cooldown = Duration::from_millis(state.snackbar.cooldown);
                    if now.saturating_duration_since(opened_at) >= cooldown {
                        log::debug!("SnackbarMiddleware: cooldown elapsed, closing");
                        self.opened_at = None;
                        dispatcher.dispatch(Action::Snackbar(SnackbarAction::Close));
                    }
                }
            }
            _ => {}
        }
        true
    }
}

impl Middleware for SnackbarMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        self.handle_at(action, state, dispatcher, Instant::now())
    }
}
