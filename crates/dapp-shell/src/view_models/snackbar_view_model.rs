//! Snackbar View Model

use crate::state::SnackbarState;
use crate::theme::Theme;
use ratatui::style::{Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct SnackbarViewModel {
    pub visible: bool,
    pub message: String,
    pub style: Style,
}

impl SnackbarViewModel {
    pub fn from_state(state: &SnackbarState, theme: &Theme) -> Self {
        Self {
            visible: state.open,
            message: format!(" {} ", state.message),
            style: Style::default()
                .fg(theme.text_primary)
                .bg(theme.status_info)
                .add_modifier(Modifier::BOLD),
        }
    }
}
