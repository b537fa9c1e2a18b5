//! Contacts View Model

use crate::state::ContactsState;

/// One table row
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRow {
    pub name: String,
    pub address: String,
    /// Number of additional display fields carried by the contact
    pub extra_fields: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactsViewModel {
    pub title: String,
    pub rows: Vec<ContactRow>,
    /// Shown instead of the table when there are no rows
    pub empty_message: &'static str,
}

impl ContactsViewModel {
    pub fn from_state(contacts: &ContactsState) -> Self {
        let rows = contacts
            .sorted()
            .into_iter()
            .map(|contact| ContactRow {
                name: contact.display_name().to_string(),
                address: contact.address.clone(),
                extra_fields: contact.extra.len(),
            })
            .collect();

        Self {
            title: format!(" Contacts ({}) ", contacts.len()),
            rows,
            empty_message: "No contacts. Press r to reload.",
        }
    }
}
