//! Block header information.

use chrono::DateTime;
use serde_json::Value;

use crate::domain::error::ChainError;

// ============================================================================
// Block Info
// ============================================================================

/// Header data of the block a transaction was included in.
///
/// Immutable once fetched. Only the header fields the explorer displays are
/// kept; the block body is not needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    /// Block height.
    pub height: u64,
    /// Chain identifier from the header.
    pub chain_id: String,
    /// Header timestamp, RFC 3339 as reported by the node.
    pub time: String,
    /// Number of transactions in the block body.
    pub tx_count: usize,
}

impl BlockInfo {
    /// Parse block info from the `result` object of a `/block` RPC response.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::Parse` if the header is missing or malformed.
    pub fn from_json(result: &Value) -> Result<Self, ChainError> {
        let header = &result["block"]["header"];
        if !header.is_object() {
            return Err(ChainError::parse("block response missing header"));
        }

        let height = header["height"]
            .as_str()
            .and_then(|h| h.parse().ok())
            .or_else(|| header["height"].as_u64())
            .ok_or_else(|| ChainError::parse("block header missing 'height'"))?;

        let chain_id = header["chain_id"].as_str().unwrap_or("unknown").to_string();
        let time = header["time"].as_str().unwrap_or_default().to_string();

        let tx_count = result["block"]["data"]["txs"]
            .as_array()
            .map_or(0, Vec::len);

        Ok(Self {
            height,
            chain_id,
            time,
            tx_count,
        })
    }

    /// Header timestamp formatted for display, falling back to the raw
    /// string when it is not valid RFC 3339.
    #[must_use]
    pub fn display_time(&self) -> String {
        format_block_time(&self.time)
    }
}

/// Format an RFC 3339 header timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
#[must_use]
pub fn format_block_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.to_utc().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_info_from_json() {
        let result = serde_json::json!({
            "block_id": { "hash": "AA" },
            "block": {
                "header": {
                    "chain_id": "pebblenet-1",
                    "height": "789000",
                    "time": "2021-10-06T15:12:23.123456789Z",
                },
                "data": { "txs": ["AAA=", "BBB="] }
            }
        });

        let block = BlockInfo::from_json(&result).unwrap();
        assert_eq!(block.height, 789_000);
        assert_eq!(block.chain_id, "pebblenet-1");
        assert_eq!(block.tx_count, 2);
        assert_eq!(block.display_time(), "2021-10-06 15:12:23 UTC");
    }

    #[test]
    fn test_block_info_missing_header() {
        let result = serde_json::json!({ "block": {} });
        assert!(BlockInfo::from_json(&result).is_err());
    }

    #[test]
    fn test_format_block_time_passthrough_on_garbage() {
        assert_eq!(format_block_time("not a time"), "not a time");
        assert_eq!(format_block_time(""), "");
    }
}
