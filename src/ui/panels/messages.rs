//! Message list panel: one card per decoded message, in sequence order.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{field_line, status_line};
use crate::domain::msg::{LogEntry, MsgBody, MsgView};
use crate::state::App;
use crate::theme::{BADGE_COLOR, ERROR_COLOR, MUTED_COLOR};
use crate::ui::helpers::create_border_block;

/// Marker shown for message kinds without a dedicated view.
pub const UNSUPPORTED_MARKER: &str = "This message type cannot be displayed";

/// Render the message list panel with the app's scroll offset.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("Messages");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(lines(app))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
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

    let Some(decoded) = &app.decoded else {
        return Vec::new();
    };
    if decoded.messages.is_empty() {
        return vec![Line::from("Transaction contains no messages")];
    }

    let mut lines = Vec::new();
    for view in &decoded.messages {
        lines.extend(message_card(view));
        lines.push(Line::from(""));
    }
    lines.pop();
    lines
}

/// All lines of one message card.
#[must_use]
pub fn message_card(view: &MsgView) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("#{} {}", view.index, view.title),
        Style::default()
            .fg(BADGE_COLOR)
            .add_modifier(Modifier::BOLD),
    ))];

    lines.extend(body_lines(&view.body));

    if let Some(log) = &view.log {
        lines.extend(log_lines(log));
    }

    lines
}

fn body_lines(body: &MsgBody) -> Vec<Line<'static>> {
    match body {
        MsgBody::Send {
            from_address,
            to_address,
            amount,
        } => vec![
            field_line("From", from_address.clone()),
            field_line("To", to_address.clone()),
            field_line("Amount", super::tx_info::format_coins(amount)),
        ],
        MsgBody::StoreCode {
            sender,
            code_size,
            checksum,
        } => vec![
            field_line("Sender", sender.clone()),
            field_line("Code size", format!("{code_size} bytes")),
            field_line("Checksum", checksum.clone()),
        ],
        MsgBody::Instantiate {
            sender,
            admin,
            code_id,
            label,
            init_payload,
            funds,
        } => {
            let mut lines = vec![
                field_line("Sender", sender.clone()),
                field_line("Code ID", code_id.to_string()),
                field_line("Label", label.clone()),
            ];
            if let Some(admin) = admin {
                lines.push(field_line("Admin", admin.clone()));
            }
            if !funds.is_empty() {
                lines.push(field_line("Funds", super::tx_info::format_coins(funds)));
            }
            lines.extend(payload_lines("Init", init_payload));
            lines
        }
        MsgBody::Execute {
            sender,
            contract,
            exec_payload,
            funds,
        } => {
            let mut lines = vec![
                field_line("Sender", sender.clone()),
                field_line("Contract", contract.clone()),
            ];
            if !funds.is_empty() {
                lines.push(field_line("Funds", super::tx_info::format_coins(funds)));
            }
            lines.extend(payload_lines("Execute", exec_payload));
            lines
        }
        MsgBody::Migrate {
            sender,
            contract,
            code_id,
            migrate_payload,
        } => {
            let mut lines = vec![
                field_line("Sender", sender.clone()),
                field_line("Contract", contract.clone()),
                field_line("New code ID", code_id.to_string()),
            ];
            lines.extend(payload_lines("Migrate", migrate_payload));
            lines
        }
        MsgBody::Unsupported { .. } => vec![Line::from(Span::styled(
            UNSUPPORTED_MARKER,
            Style::default().fg(MUTED_COLOR).add_modifier(Modifier::ITALIC),
        ))],
        MsgBody::Undecodable { error, .. } => vec![Line::from(Span::styled(
            format!("Failed to decode message: {error}"),
            Style::default().fg(ERROR_COLOR),
        ))],
    }
}

/// A labeled multi-line payload, indented under its label.
fn payload_lines(label: &str, payload: &str) -> Vec<Line<'static>> {
    let mut lines = vec![field_line(label, "")];
    for payload_line in payload.lines() {
        lines.push(Line::from(format!("  {payload_line}")));
    }
    lines
}

/// Compact summary of the log events attached to a message.
fn log_lines(log: &LogEntry) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Contract instantiations report the new address only via their event.
    if let Some(address) = log.event_attribute("instantiate", "_contract_address") {
        lines.push(field_line("Contract address", address.to_string()));
    }

    if !log.events.is_empty() {
        let summary = log
            .events
            .iter()
            .map(|event| format!("{}({})", event.kind, event.attributes.len()))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(field_line("Events", summary));
    }

    lines
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TxLogs;

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

    fn view(index: usize, title: &str, body: MsgBody) -> MsgView {
        MsgView {
            index,
            title: title.to_string(),
            body,
            log: None,
        }
    }

    #[test]
    fn test_send_card() {
        let card = message_card(&view(
            0,
            "MsgSend",
            MsgBody::Send {
                from_address: "wasm1a".to_string(),
                to_address: "wasm1b".to_string(),
                amount: vec![],
            },
        ));
        let text = text_of(&card);
        assert!(text.contains("#0 MsgSend"));
        assert!(text.contains("From: wasm1a"));
        assert!(text.contains("To: wasm1b"));
    }

    #[test]
    fn test_unsupported_card_uses_marker() {
        let card = message_card(&view(
            1,
            "MsgVote",
            MsgBody::Unsupported {
                type_url: "/cosmos.gov.v1beta1.MsgVote".to_string(),
            },
        ));
        assert!(text_of(&card).contains(UNSUPPORTED_MARKER));
    }

    #[test]
    fn test_undecodable_card_shows_error() {
        let card = message_card(&view(
            2,
            "MsgExecuteContract",
            MsgBody::Undecodable {
                type_url: "/cosmwasm.wasm.v1.MsgExecuteContract".to_string(),
                error: "buffer underflow".to_string(),
            },
        ));
        assert!(text_of(&card).contains("Failed to decode message: buffer underflow"));
    }

    #[test]
    fn test_instantiate_card_pulls_address_from_log() {
        let logs = TxLogs::parse(
            r#"[{"msg_index":0,"log":"","events":[
                {"type":"instantiate","attributes":[
                    {"key":"_contract_address","value":"wasm1contractaddr"}
                ]}
            ]}]"#,
        );
        let card = message_card(&MsgView {
            index: 0,
            title: "MsgInstantiateContract".to_string(),
            body: MsgBody::Instantiate {
                sender: "wasm1a".to_string(),
                admin: None,
                code_id: 42,
                label: "my contract".to_string(),
                init_payload: "{\n  \"count\": 0\n}".to_string(),
                funds: vec![],
            },
            log: logs.at(0).cloned(),
        });

        let text = text_of(&card);
        assert!(text.contains("Code ID: 42"));
        assert!(text.contains("Contract address: wasm1contractaddr"));
        assert!(text.contains("Events: instantiate(1)"));
        assert!(text.contains("  \"count\": 0"));
    }

    #[test]
    fn test_mixed_list_preserves_order_and_isolation() {
        let mut app = crate::state::App::new(crate::settings::resolve_backend("devnet").unwrap());
        app.tx_id = "AA".repeat(32);
        app.details = crate::domain::RemoteData::Present(
            crate::test_utils::TxRecordMother::at_height(&app.tx_id.clone(), 1),
        );
        app.decoded = Some(crate::domain::DecodedTx {
            messages: vec![
                view(
                    0,
                    "MsgSend",
                    MsgBody::Send {
                        from_address: "wasm1a".to_string(),
                        to_address: "wasm1b".to_string(),
                        amount: vec![],
                    },
                ),
                view(
                    1,
                    "MsgExecuteContract",
                    MsgBody::Undecodable {
                        type_url: "/cosmwasm.wasm.v1.MsgExecuteContract".to_string(),
                        error: "invalid wire type".to_string(),
                    },
                ),
                view(
                    2,
                    "MsgVote",
                    MsgBody::Unsupported {
                        type_url: "/cosmos.gov.v1beta1.MsgVote".to_string(),
                    },
                ),
            ],
            ..Default::default()
        });

        let text = text_of(&lines(&app));
        let send_pos = text.find("#0 MsgSend").unwrap();
        let fail_pos = text.find("#1 MsgExecuteContract").unwrap();
        let vote_pos = text.find("#2 MsgVote").unwrap();
        assert!(send_pos < fail_pos && fail_pos < vote_pos);
        assert!(text.contains("Failed to decode message"));
        assert!(text.contains(UNSUPPORTED_MARKER));
    }
}
