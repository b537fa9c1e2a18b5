//! Snackbar actions
//!
//! Transient one-line notifications shown at the bottom of the screen.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnackbarAction {
    /// Show a message. A missing or zero cooldown keeps the current one.
    Open {
        message: String,
        cooldown: Option<u64>,
    },
    /// Hide the snackbar and reset its cooldown
    Close,
}

impl SnackbarAction {
    /// Open with the current cooldown
    pub fn open(message: impl Into<String>) -> Self {
        Self::Open {
            message: message.into(),
            cooldown: None,
        }
    }

    /// Open with an explicit cooldown in milliseconds
    pub fn open_for(message: impl Into<String>, cooldown_ms: u64) -> Self {
        Self::Open {
            message: message.into(),
            cooldown: Some(cooldown_ms),
        }
    }
}
