//! Execution info panel: result status, height, block timestamp and gas.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{field_line, status_line};
use crate::domain::RemoteData;
use crate::state::App;
use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::create_border_block;

/// Render the execution info panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("Execution");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(lines(app));
    frame.render_widget(paragraph, inner);
}

/// Derive the panel's lines from current state. Pure.
#[must_use]
pub fn lines(app: &App) -> Vec<Line<'static>> {
    if !app.has_transaction() {
        return vec![Line::from("Press t to load a transaction by hash")];
    }

    if let Some(status) = status_line(&app.details) {
        return vec![status];
    }
    let Some(record) = app.details.present() else {
        return Vec::new();
    };

    let result = if record.succeeded() {
        Line::from(Span::styled("Success", Style::default().fg(SUCCESS_COLOR)))
    } else {
        Line::from(Span::styled(
            format!("Failed (code {})", record.code),
            Style::default().fg(ERROR_COLOR),
        ))
    };

    // The block cell renders independently: still loading or failed block
    // info never hides the already-present record.
    let time_value = match &app.block {
        RemoteData::Loading => "Loading...".to_string(),
        RemoteData::Error(_) => "Error".to_string(),
        RemoteData::NotFound => "Block not found".to_string(),
        RemoteData::Present(block) => block.display_time(),
    };

    let mut lines = vec![
        result,
        field_line("Height", record.height.to_string()),
        field_line("Time", time_value),
        field_line(
            "Gas",
            format!("{} / {} wanted", record.gas_used, record.gas_wanted),
        ),
    ];

    if let RemoteData::Present(block) = &app.block {
        lines.push(field_line("Chain", block.chain_id.clone()));
        lines.push(field_line("Block txs", block.tx_count.to_string()));
    }

    lines
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{BlockInfoMother, TxRecordMother};

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with_record() -> App {
        let mut app = App::new(crate::settings::resolve_backend("devnet").unwrap());
        app.tx_id = "AA".repeat(32);
        app.details = RemoteData::Present(TxRecordMother::at_height(&app.tx_id.clone(), 42));
        app
    }

    #[test]
    fn test_no_transaction_prompt() {
        let app = App::new(crate::settings::resolve_backend("devnet").unwrap());
        assert!(text_of(&lines(&app)).contains("Press t"));
    }

    #[test]
    fn test_loading_state() {
        let mut app = App::new(crate::settings::resolve_backend("devnet").unwrap());
        app.tx_id = "AA".repeat(32);
        assert_eq!(text_of(&lines(&app)), "Loading...");
    }

    #[test]
    fn test_present_with_block_loading() {
        let app = app_with_record();
        let text = text_of(&lines(&app));
        assert!(text.contains("Success"));
        assert!(text.contains("Height: 42"));
        assert!(text.contains("Time: Loading..."));
        assert!(text.contains("Gas: 151253 / 200000 wanted"));
    }

    #[test]
    fn test_present_with_block_error() {
        let mut app = app_with_record();
        app.block = RemoteData::Error("boom".to_string());
        let text = text_of(&lines(&app));
        // Record stays rendered; only the timestamp degrades.
        assert!(text.contains("Success"));
        assert!(text.contains("Time: Error"));
    }

    #[test]
    fn test_present_with_block_present() {
        let mut app = app_with_record();
        app.block = RemoteData::Present(BlockInfoMother::at_height(42));
        let text = text_of(&lines(&app));
        assert!(text.contains("Time: 2021-10-06 15:12:23 UTC"));
        assert!(text.contains("Chain: testing"));
    }

    #[test]
    fn test_failed_execution() {
        let mut app = app_with_record();
        let hash = app.tx_id.clone();
        app.details = RemoteData::Present(TxRecordMother::failed(&hash, 42, "out of gas"));
        assert!(text_of(&lines(&app)).contains("Failed (code 5)"));
    }

    #[test]
    fn test_not_found_state() {
        let mut app = app_with_record();
        app.details = RemoteData::NotFound;
        assert_eq!(text_of(&lines(&app)), "Transaction not found");
    }
}
