//! Registry errors
//!
//! Configuration errors are the caller's to handle. Integrity errors mean a
//! parameter table disagrees with itself; no network identity can be trusted
//! after one, so callers must stop initialization.

use thiserror::Error;

use crate::crypto::{AlertKeyError, Hash};

/// Invalid network selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown network '{0}' (expected one of: main, test, regtest)")]
    UnknownNetwork(String),

    #[error("Invalid combination of -regtest and -testnet")]
    ConflictingNetworkFlags,

    #[error("Network '{active}' is already active; refusing to switch to '{requested}'")]
    AlreadySelected {
        active: &'static str,
        requested: &'static str,
    },
}

/// Hard-coded parameters that do not agree with what they compute to
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("{network}: genesis hash {computed} does not match expected {expected}")]
    GenesisHashMismatch {
        network: &'static str,
        computed: Hash,
        expected: Hash,
    },

    #[error("{network}: genesis merkle root {computed} does not match expected {expected}")]
    MerkleRootMismatch {
        network: &'static str,
        computed: Hash,
        expected: Hash,
    },

    #[error("{network}: invalid alert key: {source}")]
    InvalidAlertKey {
        network: &'static str,
        source: AlertKeyError,
    },
}

/// Any failure surfaced by the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Integrity error: {0}")]
    Integrity(#[from] IntegrityError),
}

impl ParamsError {
    /// Integrity failures must terminate initialization
    pub fn is_fatal(&self) -> bool {
        matches!(self, ParamsError::Integrity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatality() {
        let config: ParamsError = ConfigError::UnknownNetwork("mainnet".into()).into();
        assert!(!config.is_fatal());

        let integrity: ParamsError = IntegrityError::GenesisHashMismatch {
            network: "main",
            computed: Hash::zero(),
            expected: Hash::zero(),
        }
        .into();
        assert!(integrity.is_fatal());
    }

    #[test]
    fn test_messages_name_the_network() {
        let err = ConfigError::UnknownNetwork("mainnet".into());
        assert!(err.to_string().contains("'mainnet'"));

        let err = IntegrityError::MerkleRootMismatch {
            network: "regtest",
            computed: Hash::zero(),
            expected: Hash::zero(),
        };
        assert!(err.to_string().starts_with("regtest:"));
    }
}
