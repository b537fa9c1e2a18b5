//! Address Book State

use crate::domain_models::Contact;
use std::collections::HashMap;

/// Contacts keyed by address
///
/// Only entries that are not the user's own accounts are ever stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactsState {
    by_address: HashMap<String, Contact>,
}

impl ContactsState {
    /// Build the map from a full address list
    ///
    /// Accounts are dropped. Later entries replace earlier ones with the
    /// same address.
    pub fn from_addresses(addresses: &[Contact]) -> Self {
        let by_address = addresses
            .iter()
            .filter(|contact| !contact.is_account)
            .map(|contact| (contact.address.clone(), contact.clone()))
            .collect();
        Self { by_address }
    }

    #[cfg(test)]
    pub fn get(&self, address: &str) -> Option<&Contact> {
        self.by_address.get(address)
    }

    #[cfg(test)]
    pub fn contains(&self, address: &str) -> bool {
        self.by_address.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.by_address.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.by_address.is_empty()
    }

    /// Contacts ordered by address, for stable display
    pub fn sorted(&self) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.by_address.values().collect();
        contacts.sort_by(|a, b| a.address.cmp(&b.address));
        contacts
    }
}
