//! Execution log parsing.
//!
//! The chain reports execution results as a raw JSON blob: one entry per
//! message, each with an optional free-form log line and a list of typed
//! events. Entries are associated with messages by their position in the
//! array, not by content.

use serde::Deserialize;

// ============================================================================
// Log Types
// ============================================================================

/// One typed event emitted during message execution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEvent {
    /// Event type, e.g. `wasm` or `transfer`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Key/value attributes in emission order.
    #[serde(default)]
    pub attributes: Vec<LogAttribute>,
}

/// A single event attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogAttribute {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// The execution log entry for one message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEntry {
    /// Message position as reported by the node. Older chains omit it for
    /// the first message.
    #[serde(default)]
    pub msg_index: usize,
    /// Free-form log line.
    #[serde(default)]
    pub log: String,
    /// Typed events emitted by this message.
    #[serde(default)]
    pub events: Vec<LogEvent>,
}

impl LogEvent {
    /// Look up an attribute value by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }
}

impl LogEntry {
    /// Look up an attribute of the first event of the given kind.
    #[must_use]
    pub fn event_attribute(&self, event_kind: &str, key: &str) -> Option<&str> {
        self.events
            .iter()
            .find(|event| event.kind == event_kind)
            .and_then(|event| event.attribute(key))
    }
}

// ============================================================================
// Tx Logs
// ============================================================================

/// All per-message log entries of one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TxLogs(Vec<LogEntry>);

impl TxLogs {
    /// Parse the raw log blob of a transaction.
    ///
    /// Failed transactions and some chains put free text here instead of
    /// JSON; that yields an empty log list, never an error.
    #[must_use]
    pub fn parse(raw_log: &str) -> Self {
        Self(serde_json::from_str(raw_log).unwrap_or_default())
    }

    /// The log entry at the given message position.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&LogEntry> {
        self.0.get(index)
    }

    /// Number of log entries.
    #[must_use]
    #[allow(dead_code)] // Public API
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no log entries.
    #[must_use]
    #[allow(dead_code)] // Public API
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
