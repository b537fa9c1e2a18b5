use crate::actions::{Action, SnackbarAction};
use crate::state::{SnackbarState, DEFAULT_COOLDOWN_MS};

/// Reducer for the snackbar notification
pub fn reduce(mut state: SnackbarState, action: &Action) -> SnackbarState {
    match action {
        Action::Snackbar(SnackbarAction::Open { message, cooldown }) => {
            state.open = true;
            state.message = message.clone();
            if let Some(cooldown) = cooldown.filter(|ms| *ms > 0) {
                state.cooldown = cooldown;
            }
        }
        Action::Snackbar(SnackbarAction::Close) => {
            // The message stays so the closing bar can still show it
            state.open = false;
            state.cooldown = DEFAULT_COOLDOWN_MS;
        }
        _ => {}
    }
    state
}
