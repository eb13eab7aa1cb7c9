//! Backend registry for known chain deployments.
//!
//! A backend bundles everything needed to talk to one CosmWasm deployment:
//! RPC endpoints, accepted denominations, the bech32 address prefix and the
//! default gas price. The registry is a static table resolved exactly once at
//! startup; an unknown selector is a fatal configuration error.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Configuration errors raised while resolving a backend.
///
/// These are fatal at startup: the process refuses to run against a backend
/// it does not know how to reach.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested backend selector matches no registry entry.
    #[error("no backend found for the given ID \"{selector}\" (known: {known})")]
    UnknownBackend {
        /// The selector that failed to resolve.
        selector: String,
        /// Comma-separated list of valid selectors.
        known: String,
    },

    /// A gas price literal could not be parsed.
    #[error("invalid gas price \"{raw}\": {reason}")]
    InvalidGasPrice {
        /// The offending literal.
        raw: String,
        /// Why parsing failed.
        reason: String,
    },
}

// ============================================================================
// Gas Price
// ============================================================================

/// A gas price as a decimal amount of a single denomination.
///
/// Parsed from the compact `"<decimal><denom>"` form used in chain
/// configuration, e.g. `0.25ucosm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasPrice {
    /// Decimal amount, kept as the original literal to avoid float drift.
    pub amount: String,
    /// Denomination the amount is quoted in.
    pub denom: String,
}

impl FromStr for GasPrice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::InvalidGasPrice {
            raw: s.to_string(),
            reason: reason.to_string(),
        };

        let split = s
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(|| invalid("missing denomination"))?;
        let (amount, denom) = s.split_at(split);

        if amount.is_empty() {
            return Err(invalid("missing amount"));
        }
        if amount.matches('.').count() > 1 || amount.ends_with('.') {
            return Err(invalid("amount is not a decimal number"));
        }
        if !denom.starts_with(|c: char| c.is_ascii_lowercase())
            || !denom
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '/')
        {
            return Err(invalid("denomination must start with a lowercase letter"));
        }

        Ok(Self {
            amount: amount.to_string(),
            denom: denom.to_string(),
        })
    }
}

impl fmt::Display for GasPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

// ============================================================================
// Backend Settings
// ============================================================================

/// Connection settings for one chain deployment.
///
/// Immutable once resolved; exactly one instance is active per process
/// lifetime and is passed by reference to every consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    /// Registry name of this backend.
    pub name: String,
    /// RPC endpoints, in failover order. Never empty.
    pub node_urls: Vec<String>,
    /// Denominations accepted on this deployment.
    pub denominations: Vec<String>,
    /// Bech32 prefix for account addresses.
    pub address_prefix: String,
    /// Default gas price.
    pub gas_price: GasPrice,
    /// Chain ID, when known ahead of time.
    pub chain_id: Option<String>,
}

impl BackendSettings {
    /// The primary RPC endpoint (first entry of the failover list).
    #[must_use]
    #[allow(dead_code)] // Public API
    pub fn primary_node_url(&self) -> &str {
        &self.node_urls[0]
    }
}

// ============================================================================
// Static Registry
// ============================================================================

/// One raw registry row. Gas prices stay literal here and are parsed during
/// resolution so the table itself can be `const`.
struct BackendEntry {
    name: &'static str,
    node_urls: &'static [&'static str],
    denominations: &'static [&'static str],
    address_prefix: &'static str,
    gas_price: &'static str,
    chain_id: Option<&'static str>,
}

/// Deployments this build knows how to reach.
///
/// `devnet` matches the local wasmd development network from the cosmjs
/// scripts; the others are public deployments.
const KNOWN_BACKENDS: &[BackendEntry] = &[
    BackendEntry {
        name: "devnet",
        node_urls: &["http://localhost:26659"],
        denominations: &["ucosm", "ustake"],
        address_prefix: "wasm",
        gas_price: "0.25ucosm",
        chain_id: Some("testing"),
    },
    BackendEntry {
        name: "pebblenet",
        node_urls: &["https://rpc.pebblenet.cosmwasm.com"],
        denominations: &["upebble", "urock"],
        address_prefix: "wasm",
        gas_price: "0.25upebble",
        chain_id: Some("pebblenet-1"),
    },
    BackendEntry {
        name: "columbus5",
        node_urls: &["https://rpc.columbus-5.terra.dev"],
        denominations: &["uluna", "uusd"],
        address_prefix: "terra",
        gas_price: "0.25uusd",
        chain_id: Some("columbus-5"),
    },
];

/// Resolve a backend selector against the static registry.
///
/// This is a pure lookup with no retry semantics.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownBackend`] when the selector matches no
/// entry, and [`ConfigError::InvalidGasPrice`] if the matched entry carries
/// a malformed gas price literal.
pub fn resolve_backend(selector: &str) -> Result<BackendSettings, ConfigError> {
    let entry = KNOWN_BACKENDS
        .iter()
        .find(|entry| entry.name == selector)
        .ok_or_else(|| ConfigError::UnknownBackend {
            selector: selector.to_string(),
            known: known_selectors().join(", "),
        })?;

    Ok(BackendSettings {
        name: entry.name.to_string(),
        node_urls: entry.node_urls.iter().map(|s| s.to_string()).collect(),
        denominations: entry.denominations.iter().map(|s| s.to_string()).collect(),
        address_prefix: entry.address_prefix.to_string(),
        gas_price: GasPrice::from_str(entry.gas_price)?,
        chain_id: entry.chain_id.map(str::to_string),
    })
}

/// Selectors accepted by [`resolve_backend`], in registry order.
#[must_use]
pub fn known_selectors() -> Vec<&'static str> {
    KNOWN_BACKENDS.iter().map(|entry| entry.name).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_resolve_known_backends() {
        for selector in known_selectors() {
            let settings = resolve_backend(selector).expect("registry entry must resolve");
            assert_eq!(settings.name, selector);
            assert!(
                !settings.node_urls.is_empty(),
                "node URL list must not be empty"
            );
        }
    }

    #[test]
    fn test_resolve_devnet_settings_exactly() {
        let settings = resolve_backend("devnet").unwrap();
        assert_eq!(settings.node_urls, vec!["http://localhost:26659"]);
        assert_eq!(settings.denominations, vec!["ucosm", "ustake"]);
        assert_eq!(settings.address_prefix, "wasm");
        assert_eq!(settings.gas_price.to_string(), "0.25ucosm");
        assert_eq!(settings.chain_id.as_deref(), Some("testing"));
    }

    #[test]
    fn test_resolve_unknown_backend() {
        let err = resolve_backend("oysternet").unwrap_err();
        match err {
            ConfigError::UnknownBackend { selector, known } => {
                assert_eq!(selector, "oysternet");
                assert!(known.contains("devnet"));
                assert!(known.contains("columbus5"));
            }
            other => panic!("expected UnknownBackend, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_is_internally_consistent() {
        // Every table row must resolve under the name it declares.
        for selector in known_selectors() {
            assert_eq!(resolve_backend(selector).unwrap().name, selector);
        }
    }

    #[rstest]
    #[case("0.25ucosm", "0.25", "ucosm")]
    #[case("1uluna", "1", "uluna")]
    #[case("0.0025ibc/27394fb092d2ec", "0.0025", "ibc/27394fb092d2ec")]
    fn test_gas_price_parse(#[case] raw: &str, #[case] amount: &str, #[case] denom: &str) {
        let price = GasPrice::from_str(raw).unwrap();
        assert_eq!(price.amount, amount);
        assert_eq!(price.denom, denom);
        assert_eq!(price.to_string(), raw);
    }

    #[rstest]
    #[case("ucosm")]
    #[case("0.25")]
    #[case("0.2.5ucosm")]
    #[case("0.25Ucosm")]
    #[case(".ucosm")]
    fn test_gas_price_parse_rejects(#[case] raw: &str) {
        assert!(GasPrice::from_str(raw).is_err(), "{raw} should not parse");
    }
}
