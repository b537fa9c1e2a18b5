//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod contacts;
mod loading;
mod snackbar;

pub use app::AppState;
pub use contacts::ContactsState;
pub use loading::LoadingState;
pub use snackbar::{SnackbarState, DEFAULT_COOLDOWN_MS};
