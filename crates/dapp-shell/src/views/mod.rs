use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod contacts_view;
pub mod loading_indicator;
pub mod main_view;
pub mod snackbar_view;

pub use loading_indicator::LoadingIndicator;

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    main_view::render(state, area, f);

    // Snackbar floats above everything else
    snackbar_view::render(state, area, f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, BootstrapAction, ContactsAction, SnackbarAction};
    use crate::domain_models::Contact;
    use crate::reducers::app_reducer::reduce;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(state, area, f);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_loading_shows_indicator() {
        let state = reduce(
            AppState::default(),
            &Action::Bootstrap(BootstrapAction::Start),
        );
        let screen = draw(&state);
        assert!(screen.contains('●'));
        assert!(screen.contains("Loading"));
    }

    #[test]
    fn test_contacts_table() {
        let state = reduce(
            AppState::default(),
            &Action::Contacts(ContactsAction::AddressesSet(vec![
                Contact::new("0xaaa").with_name("Alice"),
                Contact::account("0xbbb").with_name("Me"),
            ])),
        );
        let screen = draw(&state);
        assert!(screen.contains("Contacts (1)"));
        assert!(screen.contains("Alice"));
        assert!(screen.contains("0xaaa"));
        assert!(!screen.contains("0xbbb"));
    }

    #[test]
    fn test_snackbar_only_when_open() {
        let open = reduce(
            AppState::default(),
            &Action::Snackbar(SnackbarAction::open("Saved!")),
        );
        assert!(draw(&open).contains("Saved!"));

        let closed = reduce(open, &Action::Snackbar(SnackbarAction::Close));
        assert!(!draw(&closed).contains("Saved!"));
    }
}
