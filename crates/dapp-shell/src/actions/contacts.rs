//! Address book actions

use crate::domain_models::Contact;

#[derive(Clone, PartialEq)]
pub enum ContactsAction {
    /// Replace the address book with a full address list
    AddressesSet(Vec<Contact>),
}

impl std::fmt::Debug for ContactsAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AddressesSet(addresses) => {
                write!(f, "AddressesSet({} addresses)", addresses.len())
            }
        }
    }
}
