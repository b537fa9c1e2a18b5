use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
        }
    }

    /// Add middleware to the store (runs in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action and every action it causes
    ///
    /// Each action runs through the middleware chain and then the reducer
    /// before the next queued action is looked at.
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);

        while let Ok(action) = self.pending.try_recv() {
            self.process(action);
        }
    }

    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            let state = std::mem::take(&mut self.state);
            self.state = reduce(state, &action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{GlobalAction, SnackbarAction};
    use std::sync::{Arc, Mutex};

    /// Records every action it sees
    struct Recorder(Arc<Mutex<Vec<Action>>>);

    impl Middleware for Recorder {
        fn handle(&mut self, action: &Action, _state: &AppState, _d: &Dispatcher) -> bool {
            self.0.lock().unwrap().push(action.clone());
            true
        }
    }

    /// Turns Tick into a snackbar message and swallows the Tick
    struct TickToSnackbar;

    impl Middleware for TickToSnackbar {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            if matches!(action, Action::Global(GlobalAction::Tick)) {
                dispatcher.dispatch(Action::Snackbar(SnackbarAction::open("tick")));
                dispatcher.dispatch(Action::Snackbar(SnackbarAction::Close));
                return false;
            }
            true
        }
    }

    #[test]
    fn test_dispatch_reduces_state() {
        let mut store = Store::new(AppState::default());
        store.dispatch(Action::Snackbar(SnackbarAction::open("hello")));
        assert!(store.state().snackbar.open);
        assert_eq!(store.state().snackbar.message, "hello");
    }

    #[test]
    fn test_consumed_action_skips_reducer_and_follow_ups_run_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(TickToSnackbar));
        store.add_middleware(Box::new(Recorder(seen.clone())));

        store.dispatch(Action::Global(GlobalAction::Tick));

        // Tick was consumed before the recorder; the follow-ups were not
        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                Action::Snackbar(SnackbarAction::open("tick")),
                Action::Snackbar(SnackbarAction::Close),
            ]
        );
        assert!(!store.state().snackbar.open);
        assert_eq!(store.state().snackbar.message, "tick");
    }
}
