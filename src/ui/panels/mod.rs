//! Content panels of the transaction view.
//!
//! Each panel derives its lines as a pure function of state, so every
//! tri-state case has a distinct, non-blank rendering and the derivations
//! stay testable without a terminal.

pub mod execution;
pub mod messages;
pub mod tx_info;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::domain::RemoteData;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, WARNING_COLOR};

// ============================================================================
// Shared Status Rendering
// ============================================================================

/// The non-present states of a cell, rendered uniformly across panels.
///
/// Returns `None` for `Present`; the caller renders the typed view then.
#[must_use]
pub fn status_line<T>(cell: &RemoteData<T>) -> Option<Line<'static>> {
    match cell {
        RemoteData::Loading => Some(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(MUTED_COLOR),
        ))),
        RemoteData::Error(detail) => Some(Line::from(vec![
            Span::styled("Error", Style::default().fg(ERROR_COLOR)),
            Span::raw(format!(": {detail}")),
        ])),
        RemoteData::NotFound => Some(Line::from(Span::styled(
            "Transaction not found",
            Style::default().fg(WARNING_COLOR),
        ))),
        RemoteData::Present(_) => None,
    }
}

/// A `label: value` line in the shared panel style.
#[must_use]
pub fn field_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().fg(MUTED_COLOR),
        ),
        Span::raw(value.into()),
    ])
}

// ============================================================================
// Tests
// ============================================================================
