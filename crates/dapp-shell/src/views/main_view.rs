//! Main View
//!
//! Header, body (address book or loading indicator) and key hints.

use crate::state::AppState;
use crate::views::contacts_view;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    f.render_widget(Block::default().style(theme.panel_background()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(" dapp-shell ", theme.panel_title())))
        .style(theme.panel_background());
    f.render_widget(header, chunks[0]);

    if state.loading.loading {
        render_loading(state, chunks[1], f);
    } else {
        contacts_view::render(&state.contacts, theme, chunks[1], f);
    }

    render_key_hints(state, chunks[2], f);
}

fn render_loading(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    f.render_widget(state.indicator.widget(state.loading.frame, theme), chunks[0]);
    f.render_widget(
        Paragraph::new(Span::styled("Loading contacts...", theme.muted())).alignment(Alignment::Center),
        chunks[1],
    );
}

fn render_key_hints(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let mut spans = vec![
        Span::styled(" q", theme.key_hint()),
        Span::styled(" quit  ", theme.muted()),
        Span::styled("r", theme.key_hint()),
        Span::styled(" reload", theme.muted()),
    ];
    if state.snackbar.open {
        spans.push(Span::styled("  esc", theme.key_hint()));
        spans.push(Span::styled(" dismiss", theme.muted()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
