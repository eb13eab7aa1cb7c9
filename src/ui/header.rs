//! Header rendering: logo, backend indicator and the current hash.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::HASH_DISPLAY_LEN;
use crate::domain::ellide_middle;
use crate::state::App;
use crate::theme::SUCCESS_COLOR;

use super::helpers::create_border_block;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("");
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        1,
    );
    frame.render_widget(
        Paragraph::new(logo_line(app)).alignment(Alignment::Left),
        title_area,
    );

    if area.width > 40 {
        render_backend_indicator(frame, area, app);
    }
}

/// The logo plus, when a transaction is loaded, its shortened hash.
fn logo_line(app: &App) -> Line<'static> {
    let mut spans = vec![
        Span::raw("["),
        "wasm".magenta().bold(),
        "scope".cyan().bold(),
        Span::raw("]"),
    ];

    if app.has_transaction() {
        spans.push(Span::raw("  Tx "));
        spans.push(Span::raw(ellide_middle(&app.tx_id, HASH_DISPLAY_LEN)).bold());
    }

    Line::from(spans)
}

/// Render the backend name on the right side.
fn render_backend_indicator(frame: &mut Frame, area: Rect, app: &App) {
    let text = format!("Backend: {}", app.settings.name);
    let width = text.len() as u16;
    let label = Paragraph::new(text)
        .style(Style::default().fg(SUCCESS_COLOR).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Right);

    let indicator_area = Rect::new(
        area.right().saturating_sub(width + 2),
        area.y + 1,
        width,
        1,
    );
    frame.render_widget(label, indicator_area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_line_without_transaction() {
        let app = App::new(crate::settings::resolve_backend("devnet").unwrap());
        let line = logo_line(&app);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[wasmscope]");
    }

    #[test]
    fn test_logo_line_with_transaction_shows_ellided_hash() {
        let mut app = App::new(crate::settings::resolve_backend("devnet").unwrap());
        app.tx_id = "AB".repeat(32);
        let line = logo_line(&app);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("[wasmscope]  Tx "));
        assert!(text.contains("..."));
        assert!(text.len() < 16 + 64);
    }
}
