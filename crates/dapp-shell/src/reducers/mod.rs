//! Reducers
//!
//! Pure functions producing new state from current state + action.

pub mod app_reducer;
pub mod contacts_reducer;
pub mod loading_reducer;
pub mod snackbar_reducer;
