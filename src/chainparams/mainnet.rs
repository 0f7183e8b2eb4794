//! Main network

use super::{
    hash_literal, verify_genesis, Base58Prefixes, ChainParams, CheckpointData, IntegrityError, Network,
    NO_TIMEOUT, POW_LIMIT_MAIN,
};
use crate::chainparams::smail_genesis_block;
use crate::consensus::{ConsensusParams, Deployment, DeploymentPos, MAX_VERSION_BITS_DEPLOYMENTS};
use crate::constants::{ALERT_PUBKEY_HEX, GENESIS_TIME};
use crate::crypto::{AlertKey, Hash};
use crate::p2p;

pub const GENESIS_NONCE: u32 = 19_381_135;
pub const GENESIS_BITS: u32 = 0x1e00ffff;
pub const GENESIS_HASH: &str = "000000da8917eec0c6dc3e610bc81dd0d7b52d0adbc88125c30b63eaada7c1dd";
pub const GENESIS_MERKLE_ROOT: &str = "81ab7a8929b60089e3c6003c0dd5c168a3476786f086fb437f70f378109675e9";

pub fn params() -> Result<ChainParams, IntegrityError> {
    let network = Network::Main;

    let mut deployments = [Deployment::new(0, 0, 0); MAX_VERSION_BITS_DEPLOYMENTS];
    deployments[DeploymentPos::TestDummy.index()] = Deployment::new(28, 0, NO_TIMEOUT);
    deployments[DeploymentPos::Csv.index()] = Deployment::new(0, 0, NO_TIMEOUT);

    let mut consensus = ConsensusParams {
        hash_genesis_block: Hash::zero(),
        subsidy_halving_interval: 210_000,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1000,
        bip34_height: 0,
        bip34_hash: hash_literal(GENESIS_HASH),
        pow_limit: POW_LIMIT_MAIN,
        pow_target_timespan: 60 * 60,
        pow_target_spacing: 60,
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1916, // 95% of 2016
        miner_confirmation_window: 2016,
        deployments,
    };

    // Rarely used upper ASCII, never valid UTF-8.
    let message_start = [0xf9, 0xbe, 0xb4, 0xd9];
    let alert_key = AlertKey::from_hex(ALERT_PUBKEY_HEX)
        .map_err(|source| IntegrityError::InvalidAlertKey {
            network: network.as_str(),
            source,
        })?;

    let genesis = smail_genesis_block(GENESIS_TIME, GENESIS_NONCE, GENESIS_BITS, 1, 0);
    consensus.hash_genesis_block = verify_genesis(
        network,
        &genesis,
        hash_literal(GENESIS_HASH),
        hash_literal(GENESIS_MERKLE_ROOT),
    )?;

    Ok(ChainParams {
        network,
        consensus,
        message_start,
        alert_key: Some(alert_key),
        default_port: 9334,
        max_tip_age: 24 * 60 * 60,
        prune_after_height: 100_000,
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![63],
            script_address: vec![6],
            secret_key: vec![129],
            ext_public_key: vec![0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: vec![0x04, 0x88, 0xAD, 0xE4],
        },
        dns_seeds: p2p::main_dns_seeds(),
        fixed_seeds: p2p::main_fixed_seeds(),
        mining_requires_peers: false,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        testnet_to_be_deprecated_field_rpc: false,
        checkpoints: CheckpointData::genesis_only(hash_literal(GENESIS_HASH)),
        genesis,
    })
}
