//! Background fetch pipeline for transaction views.
//!
//! Loading a transaction is two strictly sequential lookups: the record by
//! hash, then (only when the record is present) the block at its height.
//! Results flow back to the update loop as [`FetchUpdateEvent`]s tagged with
//! the identifier they belong to; nothing here touches view state directly.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::client::ChainClient;
use crate::domain::{BlockInfo, ChainError, TxRecord};
use crate::event::FetchUpdateEvent;

// ============================================================================
// Chain API Seam
// ============================================================================

/// The two chain lookups the explorer depends on.
///
/// `ChainClient` is the production implementation; tests substitute fakes to
/// drive the pipeline without a network.
#[async_trait]
pub trait ChainApi: Send + Sync {
    /// Look up an indexed transaction; `Ok(None)` when the chain does not
    /// know the hash.
    async fn tx_by_hash(&self, hash: &str) -> Result<Option<TxRecord>, ChainError>;

    /// Look up block info at a height.
    async fn block_by_height(&self, height: u64) -> Result<BlockInfo, ChainError>;
}

#[async_trait]
impl ChainApi for ChainClient {
    async fn tx_by_hash(&self, hash: &str) -> Result<Option<TxRecord>, ChainError> {
        ChainClient::tx_by_hash(self, hash).await
    }

    async fn block_by_height(&self, height: u64) -> Result<BlockInfo, ChainError> {
        ChainClient::block_by_height(self, height).await
    }
}

// ============================================================================
// Fetch Pipeline
// ============================================================================

/// Run the load pipeline for one transaction identifier.
///
/// Emits `TxFetched` exactly once. Emits `BlockFetched` only after the
/// record arrived present; on a missing record or a failed lookup the block
/// request never starts. Errors are converted to display strings here; the
/// pipeline itself never fails.
pub async fn fetch_tx_view(
    client: &dyn ChainApi,
    tx_id: String,
    sender: mpsc::Sender<FetchUpdateEvent>,
) {
    match client.tx_by_hash(&tx_id).await {
        Ok(Some(record)) => {
            let height = record.height;
            let _ = sender
                .send(FetchUpdateEvent::TxFetched {
                    tx_id: tx_id.clone(),
                    result: Ok(Some(record)),
                })
                .await;

            let block_result = client
                .block_by_height(height)
                .await
                .map_err(|e| e.to_string());
            let _ = sender
                .send(FetchUpdateEvent::BlockFetched {
                    tx_id,
                    result: block_result,
                })
                .await;
        }
        Ok(None) => {
            let _ = sender
                .send(FetchUpdateEvent::TxFetched {
                    tx_id,
                    result: Ok(None),
                })
                .await;
        }
        Err(e) => {
            let _ = sender
                .send(FetchUpdateEvent::TxFetched {
                    tx_id,
                    result: Err(e.to_string()),
                })
                .await;
        }
    }
}

// ============================================================================
// Fetch Manager
// ============================================================================

/// Spawns fetch pipelines onto the runtime.
///
/// In-flight pipelines are not cancelled when a new identifier loads; their
/// late events carry the old identifier and are discarded by the update
/// loop's comparison guard.
pub struct FetchManager {
    client: Arc<dyn ChainApi>,
    runtime: tokio::runtime::Handle,
    event_sender: mpsc::Sender<FetchUpdateEvent>,
}

impl FetchManager {
    /// Creates a new FetchManager.
    pub fn new(
        client: Arc<dyn ChainApi>,
        runtime: tokio::runtime::Handle,
        event_sender: mpsc::Sender<FetchUpdateEvent>,
    ) -> Self {
        Self {
            client,
            runtime,
            event_sender,
        }
    }

    /// Start loading a transaction view in the background.
    pub fn load_transaction(&self, tx_id: String) {
        let client = Arc::clone(&self.client);
        let sender = self.event_sender.clone();

        self.runtime.spawn(async move {
            fetch_tx_view(client.as_ref(), tx_id, sender).await;
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
