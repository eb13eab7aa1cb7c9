//! Shared test fixtures following the Mother pattern.
#![allow(dead_code)]

use crate::domain::{BlockInfo, TxRecord};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TxRecordMother;

impl TxRecordMother {
    #[must_use]
    pub fn at_height(hash: &str, height: u64) -> TxRecord {
        TxRecord {
            hash: hash.to_string(),
            height,
            code: 0,
            raw_log: "[]".to_string(),
            gas_wanted: 200_000,
            gas_used: 151_253,
            tx_bytes: Vec::new(),
        }
    }

    #[must_use]
    pub fn failed(hash: &str, height: u64, log: &str) -> TxRecord {
        TxRecord {
            code: 5,
            raw_log: log.to_string(),
            ..Self::at_height(hash, height)
        }
    }

    #[must_use]
    pub fn with_tx_bytes(hash: &str, height: u64, tx_bytes: Vec<u8>, raw_log: &str) -> TxRecord {
        TxRecord {
            tx_bytes,
            raw_log: raw_log.to_string(),
            ..Self::at_height(hash, height)
        }
    }
}

pub struct BlockInfoMother;

impl BlockInfoMother {
    #[must_use]
    pub fn at_height(height: u64) -> BlockInfo {
        BlockInfo {
            height,
            chain_id: "testing".to_string(),
            time: "2021-10-06T15:12:23.000000000Z".to_string(),
            tx_count: 3,
        }
    }
}
