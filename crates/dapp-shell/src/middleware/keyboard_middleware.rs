//! KeyboardMiddleware - translates raw key events into actions
//!
//! | Key            | Action                          |
//! |----------------|---------------------------------|
//! | `q`, Ctrl+C    | Quit                            |
//! | `r`            | Reload the contact list         |
//! | `Esc`          | Close the snackbar (when open)  |

use crate::actions::{Action, BootstrapAction, GlobalAction, SnackbarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn translate(key: KeyEvent, state: &AppState) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Global(GlobalAction::Quit));
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
            KeyCode::Char('r') if !state.loading.loading => {
                Some(Action::Bootstrap(BootstrapAction::Start))
            }
            KeyCode::Esc if state.snackbar.open => Some(Action::Snackbar(SnackbarAction::Close)),
            _ => None,
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match Self::translate(*key, state) {
            Some(translated) => {
                log::debug!("Key {:?} -> {:?}", key.code, translated);
                dispatcher.dispatch(translated);
            }
            None => log::trace!("Unbound key {:?}", key.code),
        }

        // Raw key events never reach the reducer
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn press(middleware: &mut KeyboardMiddleware, key: KeyEvent, state: &AppState) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let forwarded = middleware.handle(
            &Action::Global(GlobalAction::KeyPressed(key)),
            state,
            &dispatcher,
        );
        assert!(!forwarded);
        rx.try_iter().collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut mw = KeyboardMiddleware::new();
        let state = AppState::default();
        let quit = vec![Action::Global(GlobalAction::Quit)];

        assert_eq!(press(&mut mw, key(KeyCode::Char('q')), &state), quit);
        assert_eq!(
            press(
                &mut mw,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &state
            ),
            quit
        );
    }

    #[test]
    fn test_reload_ignored_while_loading() {
        let mut mw = KeyboardMiddleware::new();
        let mut state = AppState::default();
        assert_eq!(
            press(&mut mw, key(KeyCode::Char('r')), &state),
            vec![Action::Bootstrap(BootstrapAction::Start)]
        );

        state.loading.loading = true;
        assert!(press(&mut mw, key(KeyCode::Char('r')), &state).is_empty());
    }

    #[test]
    fn test_esc_closes_open_snackbar() {
        let mut mw = KeyboardMiddleware::new();
        let mut state = AppState::default();
        assert!(press(&mut mw, key(KeyCode::Esc), &state).is_empty());

        state.snackbar.open = true;
        assert_eq!(
            press(&mut mw, key(KeyCode::Esc), &state),
            vec![Action::Snackbar(SnackbarAction::Close)]
        );
    }

    #[test]
    fn test_other_actions_pass_through() {
        let mut mw = KeyboardMiddleware::new();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        assert!(mw.handle(&Action::Global(GlobalAction::Tick), &AppState::default(), &dispatcher));
        assert!(rx.try_recv().is_err());
    }
}
