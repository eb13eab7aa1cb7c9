//! UI helper functions for creating styled blocks and widgets.

use ratatui::{
    layout::{Alignment, Rect},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, TITLE_STYLE};

// ============================================================================
// Block Helpers
// ============================================================================

/// Creates a bordered block with a styled title.
#[must_use]
pub fn create_border_block(title: &str) -> Block<'_> {
    let display_title = if title.is_empty() {
        String::new()
    } else {
        format!(" {} ", title)
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(TITLE_STYLE)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

/// Creates a popup-style block with a centered title.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

/// A rectangle of the given size centered within `area`, clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

// ============================================================================
// Tests
// ============================================================================
