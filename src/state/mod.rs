//! Application state and the transaction view controller.
//!
//! [`App`] is the single writer of all view state. Background fetch results
//! arrive as [`Action`]s on the main loop and are applied here, guarded by
//! the transaction identifier they were fetched for: a late result for a
//! superseded identifier is dropped without touching state.

use crate::constants::PAGE_SCROLL_LINES;
use crate::domain::{
    BlockInfo, DecodedTx, RemoteData, TxRecord, normalize_hash,
};
use crate::event::Action;
use crate::fetch::FetchManager;
use crate::settings::BackendSettings;


// ============================================================================
// Input Mode
// ============================================================================

/// Whether keystrokes go to the view or the hash input popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    EnteringHash,
}

// ============================================================================
// App State
// ============================================================================

/// All state of the running explorer.
pub struct App {
    /// Settings of the backend this process talks to.
    pub settings: BackendSettings,
    /// Identifier (canonical hash) of the transaction currently shown.
    /// Empty until the first load.
    pub tx_id: String,
    /// Tri-state cell for the transaction record.
    pub details: RemoteData<TxRecord>,
    /// Tri-state cell for the containing block.
    pub block: RemoteData<BlockInfo>,
    /// Decoded message list; populated iff `details` is `Present`.
    pub decoded: Option<DecodedTx>,
    /// Current keyboard focus.
    pub input_mode: InputMode,
    /// Contents of the hash input popup.
    pub hash_input: String,
    /// Vertical scroll offset of the message list.
    pub scroll: u16,
    /// Transient status/error message shown over the view.
    pub status_message: Option<String>,
    /// Set to request shutdown.
    pub exit: bool,
}

impl App {
    /// Create the initial state for a resolved backend.
    #[must_use]
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            settings,
            tx_id: String::new(),
            details: RemoteData::Loading,
            block: RemoteData::Loading,
            decoded: None,
            input_mode: InputMode::default(),
            hash_input: String::new(),
            scroll: 0,
            status_message: None,
            exit: false,
        }
    }

    /// Whether a transaction has been requested at all.
    #[must_use]
    pub fn has_transaction(&self) -> bool {
        !self.tx_id.is_empty()
    }

    /// Begin loading a transaction view.
    ///
    /// Resets both cells to `Loading`, records the new identifier and
    /// dispatches the background fetch. A malformed hash surfaces as a
    /// status message and leaves the current view untouched.
    pub fn load_transaction(&mut self, raw_hash: &str, fetcher: &FetchManager) {
        let tx_id = match normalize_hash(raw_hash) {
            Ok(hash) => hash,
            Err(e) => {
                self.status_message = Some(e.to_string());
                return;
            }
        };

        self.tx_id = tx_id.clone();
        self.details = RemoteData::Loading;
        self.block = RemoteData::Loading;
        self.decoded = None;
        self.scroll = 0;
        self.status_message = None;

        tracing::info!("loading transaction {tx_id}");
        fetcher.load_transaction(tx_id);
    }

    /// Apply one action to the state.
    pub fn update(&mut self, action: Action, fetcher: &FetchManager) {
        match action {
            Action::Quit => self.exit = true,

            Action::OpenHashInput => {
                self.input_mode = InputMode::EnteringHash;
                self.hash_input.clear();
            }
            Action::HashInputChar(c) => {
                if !c.is_whitespace() {
                    self.hash_input.push(c);
                }
            }
            Action::HashInputBackspace => {
                self.hash_input.pop();
            }
            Action::HashInputCancel => {
                self.input_mode = InputMode::Normal;
                self.hash_input.clear();
            }
            Action::HashInputSubmit => {
                let raw = std::mem::take(&mut self.hash_input);
                self.input_mode = InputMode::Normal;
                if !raw.is_empty() {
                    self.load_transaction(&raw, fetcher);
                }
            }

            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            Action::ScrollPageUp => self.scroll = self.scroll.saturating_sub(PAGE_SCROLL_LINES),
            Action::ScrollPageDown => self.scroll = self.scroll.saturating_add(PAGE_SCROLL_LINES),

            Action::DismissMessage => self.status_message = None,

            Action::ApplyTxResult { tx_id, result } => self.apply_tx_result(&tx_id, result),
            Action::ApplyBlockResult { tx_id, result } => self.apply_block_result(&tx_id, result),
        }
    }

    /// Commit a transaction fetch result, unless it is stale.
    fn apply_tx_result(&mut self, tx_id: &str, result: Result<Option<TxRecord>, String>) {
        if tx_id != self.tx_id {
            tracing::debug!("dropping stale tx result for {tx_id}");
            return;
        }

        match result {
            Ok(Some(record)) => {
                // Decode eagerly so rendering stays a pure read of state.
                // An undecodable envelope is an error for the whole record;
                // per-message failures are isolated inside DecodedTx.
                match DecodedTx::from_bytes(&record.tx_bytes, &record.raw_log) {
                    Ok(decoded) => {
                        self.decoded = Some(decoded);
                        self.details = RemoteData::Present(record);
                    }
                    Err(e) => {
                        self.decoded = None;
                        self.details = RemoteData::Error(e.to_string());
                    }
                }
            }
            Ok(None) => {
                // Terminal for the whole view; the block cell is never
                // settled and must not be waited on.
                self.details = RemoteData::NotFound;
            }
            Err(message) => {
                self.details = RemoteData::Error(message);
            }
        }
    }

    /// Commit a block fetch result, unless it is stale.
    ///
    /// Independent of the record cell: a block failure never rolls back a
    /// `Present` transaction.
    fn apply_block_result(&mut self, tx_id: &str, result: Result<BlockInfo, String>) {
        if tx_id != self.tx_id {
            tracing::debug!("dropping stale block result for {tx_id}");
            return;
        }

        self.block = match result {
            Ok(block) => RemoteData::Present(block),
            Err(message) => RemoteData::Error(message),
        };
    }
}
