//! Footer bar with keyboard hints.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::{App, InputMode};
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts for the active mode.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer_text = match app.input_mode {
        InputMode::Normal => "q:Quit  t:Tx hash  Up/Down:Scroll  PgUp/PgDn:Page",
        InputMode::EnteringHash => "Enter:Load  Esc:Cancel",
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_to_string(buffer: &ratatui::buffer::Buffer, width: u16) -> String {
        (0..width).map(|x| buffer[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_footer_displays_normal_mode_shortcuts() {
        let app = App::new(crate::settings::resolve_backend("devnet").unwrap());
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer(), 80);
        for shortcut in ["q:Quit", "t:Tx hash", "Up/Down:Scroll"] {
            assert!(
                content.contains(shortcut),
                "footer should contain '{shortcut}', got: {content}"
            );
        }
    }

    #[test]
    fn test_footer_switches_with_input_mode() {
        let mut app = App::new(crate::settings::resolve_backend("devnet").unwrap());
        app.input_mode = InputMode::EnteringHash;

        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer(), 80);
        assert!(content.contains("Enter:Load"));
        assert!(!content.contains("q:Quit"));
    }
}
