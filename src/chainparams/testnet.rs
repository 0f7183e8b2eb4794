//! Test network

use super::{
    hash_literal, verify_genesis, Base58Prefixes, ChainParams, CheckpointData, IntegrityError, Network,
    POW_LIMIT_MAIN,
};
use crate::chainparams::smail_genesis_block;
use crate::consensus::{ConsensusParams, Deployment, DeploymentPos, MAX_VERSION_BITS_DEPLOYMENTS};
use crate::constants::{ALERT_PUBKEY_HEX, GENESIS_TIME};
use crate::crypto::{AlertKey, Hash};
use crate::p2p;

pub const GENESIS_NONCE: u32 = 637;
pub const GENESIS_BITS: u32 = 0x1f00ffff;
pub const GENESIS_HASH: &str = "000084df78fa1480ea35f79d02e721c3ca0f295c56a551bc63a2f965c3fdca02";
pub const GENESIS_MERKLE_ROOT: &str = "81ab7a8929b60089e3c6003c0dd5c168a3476786f086fb437f70f378109675e9";

pub fn params() -> Result<ChainParams, IntegrityError> {
    let network = Network::Test;

    let mut deployments = [Deployment::new(0, 0, 0); MAX_VERSION_BITS_DEPLOYMENTS];
    // January 1, 2008 .. December 31, 2008
    deployments[DeploymentPos::TestDummy.index()] = Deployment::new(28, 1_199_145_601, 1_230_767_999);
    // March 1st, 2016 .. May 1st, 2017
    deployments[DeploymentPos::Csv.index()] = Deployment::new(0, 1_456_790_400, 1_493_596_800);

    let mut consensus = ConsensusParams {
        hash_genesis_block: Hash::zero(),
        subsidy_halving_interval: 210_000,
        majority_enforce_block_upgrade: 51,
        majority_reject_block_outdated: 75,
        majority_window: 100,
        bip34_height: 0,
        bip34_hash: hash_literal(GENESIS_HASH),
        pow_limit: POW_LIMIT_MAIN,
        pow_target_timespan: 14 * 24 * 60 * 60, // two weeks
        pow_target_spacing: 10 * 60,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1512, // 75% for testchains
        miner_confirmation_window: 2016,
        deployments,
    };

    let message_start = [0x0b, 0x11, 0x09, 0x07];
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
        default_port: 18333,
        max_tip_age: 0x7fff_ffff,
        prune_after_height: 1000,
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![112],
            script_address: vec![197],
            secret_key: vec![240],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        },
        dns_seeds: p2p::test_dns_seeds(),
        fixed_seeds: p2p::test_fixed_seeds(),
        mining_requires_peers: true,
        default_consistency_checks: false,
        require_standard: false,
        mine_blocks_on_demand: false,
        testnet_to_be_deprecated_field_rpc: true,
        checkpoints: CheckpointData::genesis_only(hash_literal(GENESIS_HASH)),
        genesis,
    })
}
