//! Actions module
//!
//! All state changes in the application are expressed as actions.
//! The root `Action` is tagged by domain; each domain owns its own enum and
//! its own reducer.

pub mod bootstrap;
pub mod command;
pub mod contacts;
pub mod global;
pub mod snackbar;

pub use bootstrap::BootstrapAction;
pub use command::Command;
pub use contacts::ContactsAction;
pub use global::GlobalAction;
pub use snackbar::SnackbarAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Contact list loading lifecycle
    Bootstrap(BootstrapAction),
    /// Address book actions
    Contacts(ContactsAction),
    /// Snackbar notification actions
    Snackbar(SnackbarAction),
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::AddressesSet { addresses } => {
                Action::Contacts(ContactsAction::AddressesSet(addresses))
            }
            Command::OpenSnackbar { message, cooldown } => {
                Action::Snackbar(SnackbarAction::Open { message, cooldown })
            }
            Command::CloseSnackbar => Action::Snackbar(SnackbarAction::Close),
        }
    }
}
