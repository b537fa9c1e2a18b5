//! Loading Indicator
//!
//! A circular progress spinner inside a styled container.
//!
//! The indicator is described by a small node tree (`node()`), which the
//! widget then draws: a container carrying the style classes, wrapping a
//! circular progress whose size is `size * 60` display units.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use std::f64::consts::TAU;

/// Display units per unit of `size`
pub const DISPLAY_UNIT: f64 = 60.0;

/// Display units covered by one terminal row of radius
const UNITS_PER_CELL: f64 = 30.0;

/// Number of dots on the ring
const RING_DOTS: usize = 12;

/// Number of highlighted dots chasing around the ring
const ARC_LENGTH: usize = 4;

/// Display parameters of the loading indicator
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingIndicator {
    /// Space-separated style classes of the container
    pub class_name: String,
    /// Size multiplier (positive)
    pub size: f64,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            size: 2.0,
        }
    }
}

/// Root of the indicator's node tree
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub classes: Vec<String>,
    pub child: CircularProgress,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircularProgress {
    /// Diameter in display units
    pub size: f64,
}

impl Container {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl LoadingIndicator {
    pub fn new(class_name: impl Into<String>, size: f64) -> Self {
        Self {
            class_name: class_name.into(),
            size,
        }
    }

    pub fn display_size(&self) -> f64 {
        self.size * DISPLAY_UNIT
    }

    /// Build the node tree for the current parameters
    pub fn node(&self) -> Container {
        Container {
            classes: self.class_name.split_whitespace().map(String::from).collect(),
            child: CircularProgress {
                size: self.display_size(),
            },
        }
    }

    /// Widget drawing this indicator at the given animation frame
    pub fn widget<'a>(&self, frame: usize, theme: &'a Theme) -> LoadingIndicatorWidget<'a> {
        LoadingIndicatorWidget {
            node: self.node(),
            frame,
            theme,
        }
    }
}

impl CircularProgress {
    /// Ring radius in terminal rows (columns are doubled for aspect ratio)
    pub fn radius_cells(&self) -> u16 {
        (self.size / UNITS_PER_CELL).round().max(1.0) as u16
    }
}

/// Largest radius whose ring (plus border) fits inside `area`
fn fit_radius(radius: u16, border: u16, area: Rect) -> u16 {
    let max_by_height = area.height.saturating_sub(1 + border) / 2;
    let max_by_width = area.width.saturating_sub(1 + border) / 4;
    radius.min(max_by_height).min(max_by_width)
}

pub struct LoadingIndicatorWidget<'a> {
    node: Container,
    frame: usize,
    theme: &'a Theme,
}

impl Widget for LoadingIndicatorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bordered = self.node.has_class("bordered");
        let muted = self.node.has_class("muted");

        let border: u16 = if bordered { 2 } else { 0 };
        let radius = fit_radius(self.node.child.radius_cells(), border, area);
        let width = (radius * 4 + 1 + border).min(area.width);
        let height = (radius * 2 + 1 + border).min(area.height);
        let container = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        let inner = if bordered {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.panel_border());
            let inner = block.inner(container);
            block.render(container, buf);
            inner
        } else {
            container
        };

        let (lit, dim) = if muted {
            (self.theme.muted(), self.theme.muted().add_modifier(Modifier::DIM))
        } else {
            (
                Style::default()
                    .fg(self.theme.accent_primary)
                    .add_modifier(Modifier::BOLD),
                self.theme.muted().add_modifier(Modifier::DIM),
            )
        };

        let cx = f64::from(inner.x) + f64::from(inner.width) / 2.0;
        let cy = f64::from(inner.y) + f64::from(inner.height) / 2.0;
        let head = self.frame % RING_DOTS;

        for dot in 0..RING_DOTS {
            let angle = TAU * dot as f64 / RING_DOTS as f64;
            let x = (cx + 2.0 * f64::from(radius) * angle.cos()).floor();
            let y = (cy + f64::from(radius) * angle.sin()).floor();
            if x < f64::from(inner.x)
                || y < f64::from(inner.y)
                || x >= f64::from(inner.right())
                || y >= f64::from(inner.bottom())
            {
                continue;
            }

            let behind_head = (head + RING_DOTS - dot) % RING_DOTS;
            let (symbol, style) = if behind_head < ARC_LENGTH {
                ("●", lit)
            } else {
                ("·", dim)
            };
            buf[(x as u16, y as u16)].set_symbol(symbol).set_style(style);
        }
    }
}
