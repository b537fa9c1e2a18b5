//! Contacts Middleware
//!
//! Loads the contact list file. The load runs on the first tick after
//! `Bootstrap::Start`, so the loading indicator gets drawn at least once.
//!
//! The file holds either a bare JSON array of contacts or a single tagged
//! command such as `{"type": "addresses set", "addresses": [...]}`.

use crate::actions::{
    Action, BootstrapAction, Command, ContactsAction, GlobalAction, SnackbarAction,
};
use crate::dispatcher::Dispatcher;
use crate::domain_models::Contact;
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::{Context, Result};
use dapp_shell_config::read_contacts_json;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Accepted shapes of the contact file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContactsDocument {
    Addresses(Vec<Contact>),
    Command(Command),
}

pub struct ContactsMiddleware {
    contacts_file: Option<PathBuf>,
    load_pending: bool,
}

impl ContactsMiddleware {
    pub fn new(contacts_file: Option<PathBuf>) -> Self {
        Self {
            contacts_file,
            load_pending: false,
        }
    }

    fn load(&self, dispatcher: &Dispatcher) {
        let Some(path) = &self.contacts_file else {
            log::info!("ContactsMiddleware: No contact file configured");
            dispatcher.dispatch(Action::Contacts(ContactsAction::AddressesSet(Vec::new())));
            dispatcher.dispatch(Action::Bootstrap(BootstrapAction::End));
            return;
        };

        match load_document(path) {
            Ok(ContactsDocument::Addresses(addresses)) => {
                log::info!(
                    "ContactsMiddleware: Loaded {} addresses from {}",
                    addresses.len(),
                    path.display()
                );
                let message = format!("Loaded {} addresses", addresses.len());
                dispatcher.dispatch(Action::Contacts(ContactsAction::AddressesSet(addresses)));
                dispatcher.dispatch(Action::Snackbar(SnackbarAction::open(message)));
            }
            Ok(ContactsDocument::Command(command)) => {
                log::info!(
                    "ContactsMiddleware: Replaying command from {}",
                    path.display()
                );
                dispatcher.dispatch(Action::from(command));
            }
            Err(e) => {
                log::error!("ContactsMiddleware: {:#}", e);
                dispatcher.dispatch(Action::Snackbar(SnackbarAction::open_for(
                    format!("{:#}", e),
                    5000,
                )));
            }
        }
        dispatcher.dispatch(Action::Bootstrap(BootstrapAction::End));
    }
}

impl Middleware for ContactsMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                self.load_pending = true;
            }
            Action::Global(GlobalAction::Tick) if self.load_pending => {
                self.load_pending = false;
                self.load(dispatcher);
            }
            _ => {}
        }
        true
    }
}

/// Read and parse the contact file
pub fn load_document(path: &Path) -> Result<ContactsDocument> {
    let json = read_contacts_json(path)?;
    parse_document(&json).with_context(|| format!("Invalid contact file {}", path.display()))
}

pub fn parse_document(json: &str) -> serde_json::Result<ContactsDocument> {
    serde_json::from_str(json)
}
