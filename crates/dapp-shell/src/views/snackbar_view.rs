//! Snackbar View
//!
//! One-line floating notification above the key hints.

use crate::state::AppState;
use crate::view_models::SnackbarViewModel;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Clear, Paragraph},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = SnackbarViewModel::from_state(&state.snackbar, &state.theme);
    if !vm.visible || area.height < 3 {
        return;
    }

    let width = bar_width(&vm.message, area.width);
    let bar = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height - 2,
        width,
        height: 1,
    };

    f.render_widget(Clear, bar);
    f.render_widget(
        Paragraph::new(vm.message)
            .style(vm.style)
            .alignment(Alignment::Center),
        bar,
    );
}

/// Width of the bar: the message length, at least 20, at most `max_width`
fn bar_width(message: &str, max_width: u16) -> u16 {
    let len = message.chars().count().min(usize::from(max_width));
    u16::try_from(len).unwrap_or(max_width).max(20).min(max_width)
}
