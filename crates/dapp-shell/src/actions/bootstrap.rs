//! Bootstrap actions
//!
//! Loading of the contact list, on startup and on manual reload.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Begin loading the contact list
    Start,
    /// Loading finished (successfully or not)
    End,
}
