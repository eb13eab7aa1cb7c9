//! Transaction message decoding and classification.
//!
//! A transaction body is an ordered list of protobuf `Any` messages. Each is
//! classified once by its type identifier into a [`MsgKind`], decoded into a
//! kind-specific [`MsgBody`] via the `cosmos-sdk-proto` registry types, and
//! paired with the execution log entry at the same position. A decode
//! failure is confined to its own message: siblings still render.

pub mod logs;

use cosmos_sdk_proto::Any;
use cosmos_sdk_proto::cosmos::bank::v1beta1::MsgSend;
use cosmos_sdk_proto::cosmos::base::v1beta1::Coin;
use cosmos_sdk_proto::cosmos::tx::v1beta1::Tx;
use cosmos_sdk_proto::cosmwasm::wasm::v1::{
    MsgExecuteContract, MsgInstantiateContract, MsgMigrateContract, MsgStoreCode,
};
use cosmos_sdk_proto::traits::Message as _;
use data_encoding::HEXLOWER;
use sha2::{Digest, Sha256};
use std::fmt;

use crate::domain::error::ChainError;

pub use self::logs::{LogEntry, TxLogs};

// ============================================================================
// Type Identifiers
// ============================================================================

pub const TYPE_MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
pub const TYPE_MSG_STORE_CODE: &str = "/cosmwasm.wasm.v1.MsgStoreCode";
pub const TYPE_MSG_INSTANTIATE_CONTRACT: &str = "/cosmwasm.wasm.v1.MsgInstantiateContract";
pub const TYPE_MSG_EXECUTE_CONTRACT: &str = "/cosmwasm.wasm.v1.MsgExecuteContract";
pub const TYPE_MSG_MIGRATE_CONTRACT: &str = "/cosmwasm.wasm.v1.MsgMigrateContract";

/// Display placeholder for a message without a type identifier.
pub const UNSET_TYPE_PLACEHOLDER: &str = "unset";

/// Strip a type identifier down to its last dot-separated segment.
///
/// `/cosmwasm.wasm.v1.MsgExecuteContract` becomes `MsgExecuteContract`; an
/// identifier without dots is returned unchanged; an absent identifier
/// becomes the [`UNSET_TYPE_PLACEHOLDER`].
#[must_use]
pub fn short_type_name(type_url: &str) -> String {
    if type_url.is_empty() {
        return UNSET_TYPE_PLACEHOLDER.to_string();
    }
    match type_url.rfind('.') {
        Some(idx) => type_url[idx + 1..].to_string(),
        None => type_url.to_string(),
    }
}

// ============================================================================
// Classification
// ============================================================================

/// The message kinds this explorer renders with dedicated views.
///
/// Classification happens exactly once per message; everything downstream
/// branches on the tag instead of re-inspecting the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MsgKind {
    Send,
    StoreCode,
    InstantiateContract,
    ExecuteContract,
    MigrateContract,
    /// Anything else; rendered as a placeholder, not an error.
    Unknown,
}

impl MsgKind {
    /// Map a type identifier onto a kind tag.
    #[must_use]
    pub fn classify(type_url: &str) -> Self {
        match type_url {
            TYPE_MSG_SEND => Self::Send,
            TYPE_MSG_STORE_CODE => Self::StoreCode,
            TYPE_MSG_INSTANTIATE_CONTRACT => Self::InstantiateContract,
            TYPE_MSG_EXECUTE_CONTRACT => Self::ExecuteContract,
            TYPE_MSG_MIGRATE_CONTRACT => Self::MigrateContract,
            _ => Self::Unknown,
        }
    }
}

// ============================================================================
// Decoded Messages
// ============================================================================

/// A coin amount prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinView {
    pub amount: String,
    pub denom: String,
}

impl From<&Coin> for CoinView {
    fn from(coin: &Coin) -> Self {
        Self {
            amount: coin.amount.clone(),
            denom: coin.denom.clone(),
        }
    }
}

impl fmt::Display for CoinView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Decoded payload of one message, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MsgBody {
    /// Token transfer.
    Send {
        from_address: String,
        to_address: String,
        amount: Vec<CoinView>,
    },
    /// Upload of a wasm code blob.
    StoreCode {
        sender: String,
        code_size: usize,
        /// SHA-256 of the uploaded blob, lowercase hex.
        checksum: String,
    },
    /// Contract instantiation.
    Instantiate {
        sender: String,
        admin: Option<String>,
        code_id: u64,
        label: String,
        init_payload: String,
        funds: Vec<CoinView>,
    },
    /// Contract execution.
    Execute {
        sender: String,
        contract: String,
        exec_payload: String,
        funds: Vec<CoinView>,
    },
    /// Contract migration to a new code id.
    Migrate {
        sender: String,
        contract: String,
        code_id: u64,
        migrate_payload: String,
    },
    /// A kind without a dedicated view; accepted terminal rendering state.
    Unsupported { type_url: String },
    /// A known kind whose payload failed to decode. Isolated to this slot.
    Undecodable { type_url: String, error: String },
}

/// One message of a transaction, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgView {
    /// Position within the transaction body.
    pub index: usize,
    /// Display title derived from the type identifier.
    pub title: String,
    /// Decoded payload.
    pub body: MsgBody,
    /// Execution log entry at the same position, when present.
    pub log: Option<LogEntry>,
}

/// A fully decoded transaction body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedTx {
    /// Transaction memo.
    pub memo: String,
    /// Fee amounts.
    pub fee: Vec<CoinView>,
    /// Gas limit granted to the transaction.
    pub gas_limit: u64,
    /// Number of signatures on the envelope.
    pub signature_count: usize,
    /// Messages in original sequence order.
    pub messages: Vec<MsgView>,
}

impl DecodedTx {
    /// Decode raw transaction bytes and pair each message with its log.
    ///
    /// Per-message payload failures surface as [`MsgBody::Undecodable`]
    /// entries; only a failure to decode the envelope itself is an error.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::Parse` when the envelope is not a valid
    /// protobuf transaction.
    pub fn from_bytes(tx_bytes: &[u8], raw_log: &str) -> Result<Self, ChainError> {
        let tx = Tx::decode(tx_bytes)
            .map_err(|e| ChainError::parse(format!("invalid transaction bytes: {e}")))?;
        let logs = TxLogs::parse(raw_log);

        let body = tx.body.unwrap_or_default();
        let messages = body
            .messages
            .iter()
            .enumerate()
            .map(|(index, any)| MsgView {
                index,
                title: short_type_name(&any.type_url),
                body: decode_any(any),
                log: logs.at(index).cloned(),
            })
            .collect();

        let (fee, gas_limit) = tx
            .auth_info
            .and_then(|auth| auth.fee)
            .map(|fee| (fee.amount.iter().map(CoinView::from).collect(), fee.gas_limit))
            .unwrap_or_default();

        Ok(Self {
            memo: body.memo,
            fee,
            gas_limit,
            signature_count: tx.signatures.len(),
            messages,
        })
    }
}

// ============================================================================
// Per-Message Decoding
// ============================================================================

/// Decode one `Any` message, never failing outward.
#[must_use]
pub fn decode_any(any: &Any) -> MsgBody {
    try_decode(any).unwrap_or_else(|error| MsgBody::Undecodable {
        type_url: any.type_url.clone(),
        error,
    })
}

fn try_decode(any: &Any) -> Result<MsgBody, String> {
    let bytes = any.value.as_slice();
    match MsgKind::classify(&any.type_url) {
        MsgKind::Send => {
            let msg = MsgSend::decode(bytes).map_err(|e| e.to_string())?;
            Ok(MsgBody::Send {
                from_address: msg.from_address,
                to_address: msg.to_address,
                amount: msg.amount.iter().map(CoinView::from).collect(),
            })
        }
        MsgKind::StoreCode => {
            let msg = MsgStoreCode::decode(bytes).map_err(|e| e.to_string())?;
            Ok(MsgBody::StoreCode {
                sender: msg.sender,
                code_size: msg.wasm_byte_code.len(),
                checksum: HEXLOWER.encode(&Sha256::digest(&msg.wasm_byte_code)),
            })
        }
        MsgKind::InstantiateContract => {
            let msg = MsgInstantiateContract::decode(bytes).map_err(|e| e.to_string())?;
            Ok(MsgBody::Instantiate {
                sender: msg.sender,
                admin: (!msg.admin.is_empty()).then_some(msg.admin),
                code_id: msg.code_id,
                label: msg.label,
                init_payload: payload_json(&msg.msg),
                funds: msg.funds.iter().map(CoinView::from).collect(),
            })
        }
        MsgKind::ExecuteContract => {
            let msg = MsgExecuteContract::decode(bytes).map_err(|e| e.to_string())?;
            Ok(MsgBody::Execute {
                sender: msg.sender,
                contract: msg.contract,
                exec_payload: payload_json(&msg.msg),
                funds: msg.funds.iter().map(CoinView::from).collect(),
            })
        }
        MsgKind::MigrateContract => {
            let msg = MsgMigrateContract::decode(bytes).map_err(|e| e.to_string())?;
            Ok(MsgBody::Migrate {
                sender: msg.sender,
                contract: msg.contract,
                code_id: msg.code_id,
                migrate_payload: payload_json(&msg.msg),
            })
        }
        MsgKind::Unknown => Ok(MsgBody::Unsupported {
            type_url: any.type_url.clone(),
        }),
    }
}

/// Render a contract payload for display.
///
/// Contract payloads are JSON by convention; pretty-print when they parse,
/// fall back to a lossy string otherwise.
#[must_use]
pub fn payload_json(payload: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(payload) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_default(),
        Err(_) => String::from_utf8_lossy(payload).into_owned(),
    }
}

// ============================================================================
// Tests
// ============================================================================
