//! Error types for chain operations.
//!
//! One structured error enum covers everything that can go wrong between the
//! RPC endpoint and a decoded transaction view. Fetch-boundary code converts
//! these into display state; they are never surfaced to the event loop as
//! failures.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for chain client and decoding operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Transport-level failure from the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The RPC endpoint answered with a JSON-RPC error.
    #[error("RPC error: {message}")]
    Rpc {
        /// Error message reported by the endpoint.
        message: String,
    },

    /// A response or payload could not be parsed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid user input, e.g. a malformed transaction hash.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ChainError {
    /// Create a new RPC error with the given message.
    #[must_use]
    pub fn rpc(message: impl Into<String>) -> Self {
        Self::Rpc {
            message: message.into(),
        }
    }

    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Convert to a `color_eyre::Report` for API compatibility.
    #[must_use = "this converts the error into a Report for display"]
    #[allow(dead_code)] // Public API
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
