use crate::actions::{Action, GlobalAction};
use crate::reducers::{contacts_reducer, loading_reducer, snackbar_reducer};
use crate::state::AppState;

/// Root reducer - handles global actions, then runs every sub-reducer
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    if let Action::Global(GlobalAction::Quit) = action {
        state.running = false;
        return state;
    }

    state.contacts = contacts_reducer::reduce(state.contacts, action);
    state.snackbar = snackbar_reducer::reduce(state.snackbar, action);
    state.loading = loading_reducer::reduce(state.loading, action);

    state
}
