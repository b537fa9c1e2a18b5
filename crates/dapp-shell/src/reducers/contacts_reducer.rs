use crate::actions::{Action, ContactsAction};
use crate::state::ContactsState;

/// Reducer for the address book
pub fn reduce(state: ContactsState, action: &Action) -> ContactsState {
    match action {
        Action::Contacts(ContactsAction::AddressesSet(addresses)) => {
            let next = ContactsState::from_addresses(addresses);
            log::debug!(
                "Address book rebuilt: {} of {} addresses are contacts",
                next.len(),
                addresses.len()
            );
            next
        }
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{BootstrapAction, GlobalAction, SnackbarAction};
    use crate::domain_models::Contact;

    fn addresses_set(addresses: Vec<Contact>) -> Action {
        Action::Contacts(ContactsAction::AddressesSet(addresses))
    }

    #[test]
    fn test_keeps_exactly_non_accounts() {
        let input = vec![
            Contact::new("0xa"),
            Contact::account("0xb"),
            Contact::new("0xc"),
            Contact::account("0xd"),
        ];
        let state = reduce(ContactsState::default(), &addresses_set(input.clone()));

        let expected: Vec<&Contact> = input.iter().filter(|c| !c.is_account).collect();
        assert_eq!(state.len(), expected.len());
        for contact in expected {
            assert_eq!(state.get(&contact.address), Some(contact));
        }
        assert!(!state.contains("0xb"));
        assert!(!state.contains("0xd"));
    }

    #[test]
    fn test_replaces_previous_map() {
        let state = reduce(
            ContactsState::default(),
            &addresses_set(vec![Contact::new("0xold")]),
        );
        let state = reduce(state, &addresses_set(vec![Contact::new("0xnew")]));
        assert_eq!(state.len(), 1);
        assert!(state.contains("0xnew"));
        assert!(!state.contains("0xold"));
    }

    #[test]
    fn test_same_action_twice_is_idempotent() {
        let action = addresses_set(vec![
            Contact::new("0x1").with_name("a"),
            Contact::new("0x2"),
            Contact::new("0x1").with_name("b"),
        ]);
        let once = reduce(ContactsState::default(), &action);
        let twice = reduce(once.clone(), &action);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_list_clears_map() {
        let state = reduce(
            ContactsState::default(),
            &addresses_set(vec![Contact::new("0x1")]),
        );
        let state = reduce(state, &addresses_set(Vec::new()));
        assert!(state.is_empty());
    }

    #[test]
    fn test_missing_addresses_share_empty_key() {
        let nameless: Contact = serde_json::from_str(r#"{"name": "first"}"#).unwrap();
        let other: Contact = serde_json::from_str(r#"{"name": "second"}"#).unwrap();
        let state = reduce(ContactsState::default(), &addresses_set(vec![nameless, other]));
        assert_eq!(state.len(), 1);
        assert_eq!(state.get("").unwrap().display_name(), "second");
    }

    #[test]
    fn test_other_actions_pass_through() {
        let state = reduce(
            ContactsState::default(),
            &addresses_set(vec![Contact::new("0x1")]),
        );
        for action in [
            Action::Global(GlobalAction::Tick),
            Action::Snackbar(SnackbarAction::Close),
            Action::Bootstrap(BootstrapAction::End),
        ] {
            assert_eq!(reduce(state.clone(), &action), state);
        }
    }
}
