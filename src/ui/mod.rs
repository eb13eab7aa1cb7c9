//! Rendering for the wasmscope TUI.
//!
//! Rendering is a pure derivation of [`App`] state: each frame is rebuilt
//! from the current tri-state cells and the decoded message list.

pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};

use crate::state::{App, InputMode};
use crate::theme::WARNING_COLOR;

use self::helpers::{centered_rect, create_popup_block};

/// Render one frame of the application.
pub fn render(app: &App, frame: &mut Frame) {
    let areas = layout::split_screen(frame.area());

    header::render(frame, areas.header, app);
    panels::execution::render(frame, areas.execution, app);
    panels::tx_info::render(frame, areas.tx_info, app);
    panels::messages::render(frame, areas.messages, app);
    footer::render(frame, areas.footer, app);

    if app.input_mode == InputMode::EnteringHash {
        render_hash_input(app, frame);
    }

    if let Some(message) = &app.status_message {
        render_status_message(message, frame);
    }
}

/// Popup for entering a transaction hash.
fn render_hash_input(app: &App, frame: &mut Frame) {
    let area = centered_rect(70, 3, frame.area());
    frame.render_widget(Clear, area);

    let block = create_popup_block("Load transaction");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = Paragraph::new(Line::from(format!("{}▏", app.hash_input)));
    frame.render_widget(input, inner);
}

/// Transient status/error message overlay.
fn render_status_message(message: &str, frame: &mut Frame) {
    let width = (message.len() as u16 + 4).clamp(20, frame.area().width);
    let area = centered_rect(width, 3, frame.area());
    frame.render_widget(Clear, area);

    let block = create_popup_block("Notice");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(WARNING_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

// ============================================================================
// Tests
// ============================================================================
