//! Event and action types connecting background fetches to the update loop.

use crate::domain::{BlockInfo, TxRecord};

/// Events emitted by background fetch tasks.
///
/// Every event carries the transaction identifier it belongs to so the
/// update loop can discard results that arrive after the identifier has
/// changed. Errors cross the channel as display strings; they were already
/// handled at the fetch boundary.
#[derive(Debug)]
pub enum FetchUpdateEvent {
    /// The transaction lookup finished. `Ok(None)` means the chain does not
    /// know the hash.
    TxFetched {
        tx_id: String,
        result: Result<Option<TxRecord>, String>,
    },
    /// The block lookup for a present transaction finished.
    BlockFetched {
        tx_id: String,
        result: Result<BlockInfo, String>,
    },
}

/// Application actions triggered by user input or fetch events.
#[derive(Debug)]
pub enum Action {
    Quit,
    OpenHashInput,
    HashInputChar(char),
    HashInputBackspace,
    HashInputSubmit,
    HashInputCancel,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    DismissMessage,

    ApplyTxResult {
        tx_id: String,
        result: Result<Option<TxRecord>, String>,
    },
    ApplyBlockResult {
        tx_id: String,
        result: Result<BlockInfo, String>,
    },
}

impl From<FetchUpdateEvent> for Action {
    fn from(event: FetchUpdateEvent) -> Self {
        match event {
            FetchUpdateEvent::TxFetched { tx_id, result } => Self::ApplyTxResult { tx_id, result },
            FetchUpdateEvent::BlockFetched { tx_id, result } => {
                Self::ApplyBlockResult { tx_id, result }
            }
        }
    }
}
