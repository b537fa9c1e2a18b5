//! Snackbar State

/// Cooldown used until a caller asks for another one, and after every close
pub const DEFAULT_COOLDOWN_MS: u64 = 1000;

/// Visibility and payload of the snackbar notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnackbarState {
    pub open: bool,
    pub message: String,
    /// How long the message stays visible, in milliseconds (always > 0)
    pub cooldown: u64,
}

impl Default for SnackbarState {
    fn default() -> Self {
        Self {
            open: false,
            message: String::new(),
            cooldown: DEFAULT_COOLDOWN_MS,
        }
    }
}
