//! HTTP clients for chain RPC endpoints.
//!
//! This module provides the typed client the explorer uses to talk to a
//! backend's Tendermint RPC endpoints, plus the shared HTTP wrapper it is
//! built on.

pub mod chain;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use chain::ChainClient;
pub use http::{HttpClient, HttpConfig};
