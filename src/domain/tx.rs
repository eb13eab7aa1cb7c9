//! Transaction record types and hash handling.
//!
//! A [`TxRecord`] is the indexed form of a committed transaction as returned
//! by the `/tx` RPC endpoint: the execution result plus the raw
//! protobuf-encoded transaction bytes. Message decoding lives in
//! [`crate::domain::msg`]; this module only carries the record.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use data_encoding::HEXUPPER;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::domain::error::ChainError;

// ============================================================================
// Hash Handling
// ============================================================================

/// Normalize a user-supplied transaction hash.
///
/// Accepts an optional `0x`/`0X` prefix and any letter case; the result is
/// the canonical 64-character uppercase hex form used on the wire.
///
/// # Errors
///
/// Returns [`ChainError::InvalidInput`] when the input is not 64 hex digits.
pub fn normalize_hash(input: &str) -> Result<String, ChainError> {
    let trimmed = input.trim();
    let stripped = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let upper = stripped.to_ascii_uppercase();

    if upper.len() != 64 {
        return Err(ChainError::invalid_input(format!(
            "transaction hash must be 64 hex characters, got {}",
            upper.len()
        )));
    }
    if HEXUPPER.decode(upper.as_bytes()).is_err() {
        return Err(ChainError::invalid_input(
            "transaction hash must be hexadecimal",
        ));
    }

    Ok(upper)
}

/// Shorten an identifier for display by eliding the middle.
#[must_use]
pub fn ellide_middle(text: &str, max_len: usize) -> String {
    if text.len() <= max_len || max_len < 5 {
        return text.to_string();
    }
    let keep = max_len - 3;
    let front = keep / 2 + keep % 2;
    let back = keep / 2;
    format!("{}...{}", &text[..front], &text[text.len() - back..])
}

// ============================================================================
// Transaction Record
// ============================================================================

/// A committed transaction as indexed by the chain.
///
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxRecord {
    /// Transaction hash, uppercase hex without prefix.
    pub hash: String,
    /// Height of the block the transaction was included in.
    pub height: u64,
    /// Execution result code; `0` means success.
    pub code: u32,
    /// Raw event/log blob emitted by execution.
    pub raw_log: String,
    /// Gas requested by the transaction.
    pub gas_wanted: u64,
    /// Gas consumed by execution.
    pub gas_used: u64,
    /// Raw protobuf-encoded transaction bytes.
    pub tx_bytes: Vec<u8>,
}

impl TxRecord {
    /// Parse a record from the `result` object of a `/tx` RPC response.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::Parse` if mandatory fields are missing or
    /// malformed.
    pub fn from_json(result: &Value) -> Result<Self, ChainError> {
        let hash = result["hash"]
            .as_str()
            .ok_or_else(|| ChainError::parse("tx response missing 'hash'"))?
            .to_string();

        let height = parse_number(&result["height"])
            .ok_or_else(|| ChainError::parse("tx response missing 'height'"))?;

        let tx_result = &result["tx_result"];
        let code = tx_result["code"].as_u64().unwrap_or(0) as u32;
        let raw_log = tx_result["log"].as_str().unwrap_or_default().to_string();
        let gas_wanted = parse_number(&tx_result["gas_wanted"]).unwrap_or(0);
        let gas_used = parse_number(&tx_result["gas_used"]).unwrap_or(0);

        let tx_b64 = result["tx"]
            .as_str()
            .ok_or_else(|| ChainError::parse("tx response missing 'tx' bytes"))?;
        let tx_bytes = BASE64
            .decode(tx_b64)
            .map_err(|_| ChainError::parse("tx bytes are not valid base64"))?;

        Ok(Self {
            hash,
            height,
            code,
            raw_log,
            gas_wanted,
            gas_used,
            tx_bytes,
        })
    }

    /// Whether execution succeeded (result code 0).
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.code == 0
    }

    /// SHA-256 of the raw transaction bytes, uppercase hex.
    ///
    /// For a healthy endpoint this equals [`TxRecord::hash`]; the view layer
    /// uses the comparison as an integrity indicator.
    #[must_use]
    pub fn computed_hash(&self) -> String {
        HEXUPPER.encode(&Sha256::digest(&self.tx_bytes))
    }
}

/// Tendermint encodes 64-bit numbers as JSON strings; accept both forms.
fn parse_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("AB".repeat(32), true)]
    #[case("AB".repeat(31), false)]
    #[case("AB".repeat(33), false)]
    #[case(String::new(), false)]
    fn test_normalize_hash_length(#[case] input: String, #[case] ok: bool) {
        assert_eq!(normalize_hash(&input).is_ok(), ok);
    }

    #[test]
    fn test_normalize_hash_prefix_and_case() {
        let canonical = "AB".repeat(32);
        let prefixed = format!("0x{}", "ab".repeat(32));
        assert_eq!(normalize_hash(&prefixed).unwrap(), canonical);
        assert_eq!(normalize_hash(&canonical).unwrap(), canonical);
    }

    #[test]
    fn test_normalize_hash_rejects_non_hex() {
        let input = "ZZ".repeat(32);
        assert!(normalize_hash(&input).is_err());
    }

    #[test]
    fn test_ellide_middle() {
        assert_eq!(ellide_middle("short", 20), "short");
        let long = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let ellided = ellide_middle(long, 13);
        assert_eq!(ellided.len(), 13);
        assert!(ellided.starts_with("ABCDE"));
        assert!(ellided.ends_with("VWXYZ"));
        assert!(ellided.contains("..."));
    }

    #[test]
    fn test_tx_record_from_json() {
        let result = serde_json::json!({
            "hash": "93A3".repeat(16),
            "height": "5040796",
            "tx_result": {
                "code": 0,
                "log": "[]",
                "gas_wanted": "200000",
                "gas_used": "151253"
            },
            "tx": BASE64.encode(b"not a real tx"),
        });

        let record = TxRecord::from_json(&result).unwrap();
        assert_eq!(record.height, 5_040_796);
        assert_eq!(record.gas_wanted, 200_000);
        assert_eq!(record.gas_used, 151_253);
        assert!(record.succeeded());
        assert_eq!(record.tx_bytes, b"not a real tx");
    }

    #[test]
    fn test_tx_record_from_json_failed_execution() {
        let result = serde_json::json!({
            "hash": "00".repeat(32),
            "height": 12,
            "tx_result": {
                "code": 5,
                "log": "out of gas",
            },
            "tx": "",
        });

        let record = TxRecord::from_json(&result).unwrap();
        assert!(!record.succeeded());
        assert_eq!(record.raw_log, "out of gas");
        assert!(record.tx_bytes.is_empty());
    }

    #[test]
    fn test_tx_record_from_json_rejects_missing_tx() {
        let result = serde_json::json!({ "hash": "00", "height": "1" });
        assert!(TxRecord::from_json(&result).is_err());
    }

    #[test]
    fn test_computed_hash_is_sha256_of_bytes() {
        let record = TxRecord {
            hash: String::new(),
            height: 1,
            code: 0,
            raw_log: String::new(),
            gas_wanted: 0,
            gas_used: 0,
            tx_bytes: b"abc".to_vec(),
        };
        // Well-known SHA-256 test vector for "abc".
        assert_eq!(
            record.computed_hash(),
            "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
        );
    }
}
