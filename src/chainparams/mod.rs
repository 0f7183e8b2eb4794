//! Chain parameters - one immutable bundle per network
//!
//! Each network has a builder (`mainnet::params`, `testnet::params`,
//! `regtest::params`) that assembles its bundle, rebuilds the genesis block
//! from literals and refuses to return anything if the genesis identity
//! disagrees with the hard-coded hashes. The registry hands out the active
//! bundle.

mod checkpoints;
mod error;
mod genesis;
pub mod mainnet;
mod prefixes;
pub mod regtest;
mod registry;
pub mod testnet;

pub use checkpoints::*;
pub use error::*;
pub use genesis::*;
pub use prefixes::*;
pub use registry::*;

use primitive_types::U256;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};

use crate::consensus::{Block, ConsensusParams};
use crate::crypto::{AlertKey, Hash};
use crate::p2p::{DnsSeed, SeedSpec6};

/// Loosest target on main and test: `0x0000ffff...ff`
pub const POW_LIMIT_MAIN: U256 = U256([u64::MAX, u64::MAX, u64::MAX, 0x0000_ffff_ffff_ffff]);

/// Loosest target on regtest: `0x7fff...ff`
pub const POW_LIMIT_REGTEST: U256 = U256([u64::MAX, u64::MAX, u64::MAX, 0x7fff_ffff_ffff_ffff]);

/// Timeout for deployments that never expire
pub const NO_TIMEOUT: i64 = 999_999_999_999;

/// The three supported networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Test,
    Regtest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

    /// Canonical identifier used across the node
    pub const fn as_str(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }

    /// Resolve the `-testnet` / `-regtest` command-line convention
    pub fn from_flags(testnet: bool, regtest: bool) -> Result<Self, ConfigError> {
        match (testnet, regtest) {
            (true, true) => Err(ConfigError::ConflictingNetworkFlags),
            (true, false) => Ok(Network::Test),
            (false, true) => Ok(Network::Regtest),
            (false, false) => Ok(Network::Main),
        }
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|network| network.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownNetwork(s.to_string()))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Network {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Everything the node needs to know about one network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainParams {
    pub network: Network,
    pub consensus: ConsensusParams,
    /// Prefix of every P2P message; differs per network
    pub message_start: [u8; 4],
    pub alert_key: Option<AlertKey>,
    pub default_port: u16,
    /// Tip older than this (seconds) means the node is still in initial block download
    pub max_tip_age: i64,
    /// Pruning never removes blocks below this height
    pub prune_after_height: u64,
    pub base58_prefixes: Base58Prefixes,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<SeedSpec6>,
    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub checkpoints: CheckpointData,
    pub genesis: Block,
}

impl ChainParams {
    /// Build the bundle for `network`
    pub fn for_network(network: Network) -> Result<Self, IntegrityError> {
        match network {
            Network::Main => mainnet::params(),
            Network::Test => testnet::params(),
            Network::Regtest => regtest::params(),
        }
    }

    pub fn network_id(&self) -> &'static str {
        self.network.as_str()
    }

    pub fn genesis_hash(&self) -> Hash {
        self.consensus.hash_genesis_block
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }
}

/// Parse a hash literal from a parameter table.
///
/// A malformed literal becomes the null hash and then fails verification.
pub(crate) fn hash_literal(hex: &str) -> Hash {
    Hash::from_hex(hex).unwrap_or_default()
}

/// Recompute the genesis identity and compare it with the expected literals.
///
/// Returns the genesis hash on success.
pub fn verify_genesis(
    network: Network,
    genesis: &Block,
    expected_hash: Hash,
    expected_merkle_root: Hash,
) -> Result<Hash, IntegrityError> {
    let computed = genesis.hash();
    if computed != expected_hash {
        error!(network = %network, %computed, expected = %expected_hash, "genesis hash mismatch");
        return Err(IntegrityError::GenesisHashMismatch {
            network: network.as_str(),
            computed,
            expected: expected_hash,
        });
    }

    let merkle_root = genesis.compute_merkle_root();
    if merkle_root != expected_merkle_root || genesis.header.merkle_root != merkle_root {
        error!(network = %network, computed = %merkle_root, expected = %expected_merkle_root, "genesis merkle root mismatch");
        return Err(IntegrityError::MerkleRootMismatch {
            network: network.as_str(),
            computed: merkle_root,
            expected: expected_merkle_root,
        });
    }

    debug!(network = %network, genesis = %computed, "genesis verified");
    Ok(computed)
}
