//! Loading State

/// Whether the contact list is being loaded, plus the spinner frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub loading: bool,
    pub frame: usize,
}
