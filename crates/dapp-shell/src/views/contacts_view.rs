//! Contacts View
//!
//! Address book rendered as a table, sorted by address.

use crate::state::ContactsState;
use crate::theme::Theme;
use crate::view_models::ContactsViewModel;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub fn render(contacts: &ContactsState, theme: &Theme, area: Rect, f: &mut Frame) {
    let vm = ContactsViewModel::from_state(contacts);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title(vm.title.clone())
        .title_style(theme.panel_title());

    if vm.rows.is_empty() {
        let empty = Paragraph::new(vm.empty_message)
            .style(theme.muted())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Name", "Address", "Fields"]).style(theme.table_header());
    let rows = vm.rows.iter().enumerate().map(|(i, row)| {
        let bg = if i % 2 == 0 {
            theme.table_row_bg_normal
        } else {
            theme.table_row_bg_alt
        };
        Row::new(vec![
            Cell::from(row.name.clone()),
            Cell::from(row.address.clone()),
            Cell::from(row.extra_fields.to_string()),
        ])
        .style(theme.table_row().patch(Style::default().bg(bg)))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(60),
            Constraint::Percentage(10),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}
