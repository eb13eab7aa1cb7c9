//! Transaction info panel: hash, memo, fee and signature envelope data.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use super::{field_line, status_line};
use crate::domain::msg::CoinView;
use crate::state::App;
use crate::ui::helpers::create_border_block;

/// Render the transaction info panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("Transaction");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(lines(app)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Derive the panel's lines from current state. Pure.
#[must_use]
pub fn lines(app: &App) -> Vec<Line<'static>> {
    if !app.has_transaction() {
        return vec![Line::from("")];
    }

    if let Some(status) = status_line(&app.details) {
        return vec![status];
    }
    let Some(record) = app.details.present() else {
        return Vec::new();
    };

    let mut lines = vec![field_line("Hash", record.hash.clone())];

    if record.computed_hash() != record.hash {
        lines.push(field_line("Integrity", "bytes do not match reported hash"));
    }

    if let Some(decoded) = &app.decoded {
        let memo = if decoded.memo.is_empty() {
            "(none)".to_string()
        } else {
            decoded.memo.clone()
        };
        lines.push(field_line("Memo", memo));
        lines.push(field_line("Fee", format_coins(&decoded.fee)));
        lines.push(field_line("Gas limit", decoded.gas_limit.to_string()));
        lines.push(field_line(
            "Signatures",
            decoded.signature_count.to_string(),
        ));
        lines.push(field_line("Messages", decoded.messages.len().to_string()));
    }

    lines
}

/// Comma-joined coin list, or a placeholder for an empty one.
#[must_use]
pub fn format_coins(coins: &[CoinView]) -> String {
    if coins.is_empty() {
        return "(none)".to_string();
    }
    coins
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Tests
// ============================================================================
