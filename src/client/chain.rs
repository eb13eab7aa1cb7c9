//! Tendermint RPC client for transaction and block lookups.
//!
//! Speaks the JSON-RPC-over-HTTP-GET dialect every CosmWasm node exposes.
//! Only the two endpoints the explorer needs are implemented: `/tx` and
//! `/block`. Endpoints are tried in the backend's failover order; a
//! transport failure advances to the next URL, while an answer from the
//! endpoint (including an RPC-level error) is final.

use serde_json::Value;

use super::http::HttpClient;
use crate::domain::{BlockInfo, ChainError, TxRecord, normalize_hash};
use crate::settings::BackendSettings;

// ============================================================================
// Chain Client
// ============================================================================

/// Client for one backend's RPC endpoints.
#[derive(Debug, Clone)]
pub struct ChainClient {
    http: HttpClient,
    node_urls: Vec<String>,
}

impl ChainClient {
    /// Create a client for the given backend.
    #[must_use]
    pub fn new(settings: &BackendSettings) -> Self {
        Self::from_urls(settings.node_urls.clone())
    }

    /// Create a client from a raw endpoint list (failover order).
    #[must_use]
    pub fn from_urls(node_urls: Vec<String>) -> Self {
        Self {
            http: HttpClient::new(),
            node_urls,
        }
    }

    /// Fetch an indexed transaction by hash.
    ///
    /// Returns `Ok(None)` when the node reports the transaction as unknown.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, RPC-level failure or a
    /// malformed response.
    pub async fn tx_by_hash(&self, hash: &str) -> Result<Option<TxRecord>, ChainError> {
        let hash = normalize_hash(hash)?;
        let json = self
            .rpc_get(&format!("tx?hash=0x{hash}&prove=false"))
            .await?;

        if let Some(error) = json.get("error") {
            if is_not_found(error) {
                return Ok(None);
            }
            return Err(ChainError::rpc(rpc_error_message(error)));
        }

        let result = json
            .get("result")
            .ok_or_else(|| ChainError::parse("tx response missing 'result'"))?;
        TxRecord::from_json(result).map(Some)
    }

    /// Fetch block header info at the given height.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, RPC-level failure or a
    /// malformed response.
    pub async fn block_by_height(&self, height: u64) -> Result<BlockInfo, ChainError> {
        let json = self.rpc_get(&format!("block?height={height}")).await?;

        if let Some(error) = json.get("error") {
            return Err(ChainError::rpc(rpc_error_message(error)));
        }

        let result = json
            .get("result")
            .ok_or_else(|| ChainError::parse("block response missing 'result'"))?;
        BlockInfo::from_json(result)
    }

    /// GET a path against the endpoint list with transport-level failover.
    async fn rpc_get(&self, path_and_query: &str) -> Result<Value, ChainError> {
        let mut last_error: Option<ChainError> = None;

        for node_url in &self.node_urls {
            let url = join_url(node_url, path_and_query);
            match self.http.get(&url).send().await {
                Ok(response) => {
                    return response.json().await.map_err(ChainError::Network);
                }
                Err(e) => {
                    tracing::debug!("RPC endpoint {node_url} failed, trying next: {e}");
                    last_error = Some(ChainError::Network(e));
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| ChainError::rpc("no RPC endpoints configured for backend")))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Join a base node URL and a path, tolerating trailing slashes.
fn join_url(node_url: &str, path_and_query: &str) -> String {
    format!("{}/{}", node_url.trim_end_matches('/'), path_and_query)
}

/// Whether a JSON-RPC error object denotes a missing transaction.
///
/// Tendermint reports this as an internal error whose detail string ends in
/// `not found`, so the detail is the only discriminator available.
fn is_not_found(error: &Value) -> bool {
    error["data"]
        .as_str()
        .or_else(|| error["message"].as_str())
        .is_some_and(|detail| detail.contains("not found"))
}

/// Human-readable message for a JSON-RPC error object.
fn rpc_error_message(error: &Value) -> String {
    let message = error["message"].as_str().unwrap_or("unknown RPC error");
    match error["data"].as_str() {
        Some(data) if !data.is_empty() => format!("{message}: {data}"),
        _ => message.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:26659", "tx?hash=0xAB"),
            "http://localhost:26659/tx?hash=0xAB"
        );
        assert_eq!(
            join_url("http://localhost:26659/", "block?height=1"),
            "http://localhost:26659/block?height=1"
        );
    }

    #[test]
    fn test_is_not_found() {
        let not_found = serde_json::json!({
            "code": -32603,
            "message": "Internal error",
            "data": "tx (AB12) not found"
        });
        assert!(is_not_found(&not_found));

        let other = serde_json::json!({
            "code": -32603,
            "message": "Internal error",
            "data": "height 10 must be less than or equal to the current blockchain height 5"
        });
        assert!(!is_not_found(&other));
    }

    #[test]
    fn test_rpc_error_message() {
        let error = serde_json::json!({
            "message": "Internal error",
            "data": "something broke"
        });
        assert_eq!(rpc_error_message(&error), "Internal error: something broke");

        let bare = serde_json::json!({ "message": "Parse error" });
        assert_eq!(rpc_error_message(&bare), "Parse error");

        let empty = serde_json::json!({});
        assert_eq!(rpc_error_message(&empty), "unknown RPC error");
    }
}
