use super::{ContactsState, LoadingState, SnackbarState};
use crate::theme::Theme;
use crate::views::LoadingIndicator;

/// Root application state
///
/// Owned by the store and replaced wholesale by the root reducer.
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub contacts: ContactsState,
    pub snackbar: SnackbarState,
    pub loading: LoadingState,
    /// Display parameters of the loading indicator
    pub indicator: LoadingIndicator,
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            contacts: ContactsState::default(),
            snackbar: SnackbarState::default(),
            loading: LoadingState::default(),
            indicator: LoadingIndicator::default(),
            theme: Theme::default(),
        }
    }
}

impl AppState {
    pub fn with_indicator(mut self, indicator: LoadingIndicator) -> Self {
        self.indicator = indicator;
        self
    }
}
