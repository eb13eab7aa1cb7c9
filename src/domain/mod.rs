//! Domain types for the wasmscope transaction explorer.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for chain operations
//! - [`remote`] - Tri-state cells for remotely fetched values
//! - [`tx`] - Transaction records and hash handling
//! - [`block`] - Block header information
//! - [`msg`] - Message decoding, classification and execution logs

// ============================================================================
// Module Declarations
// ============================================================================

pub mod block;
pub mod error;
pub mod msg;
pub mod remote;
pub mod tx;

// ============================================================================
// Re-exports
// ============================================================================

pub use block::BlockInfo;
pub use error::ChainError;
pub use msg::logs::{LogEntry, TxLogs};
pub use msg::{DecodedTx, MsgBody, MsgKind, MsgView, short_type_name};
pub use remote::RemoteData;
pub use tx::{TxRecord, ellide_middle, normalize_hash};
