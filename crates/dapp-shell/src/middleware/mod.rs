use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod contacts_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod snackbar_middleware;

pub use contacts_middleware::ContactsMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use snackbar_middleware::SnackbarMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware is where side effects live (file I/O, timers, key translation),
/// keeping reducers pure.
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only)
    /// - `dispatcher`: Use to queue follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
