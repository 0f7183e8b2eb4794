//! Regression test network
//!
//! Retargeting is off and blocks are mined on demand, so tests can produce
//! chains instantly and deterministically. Never contacts real peers.

use super::{
    hash_literal, verify_genesis, Base58Prefixes, ChainParams, CheckpointData, IntegrityError, Network,
    NO_TIMEOUT, POW_LIMIT_REGTEST,
};
use crate::chainparams::smail_genesis_block;
use crate::consensus::{ConsensusParams, Deployment, DeploymentPos, MAX_VERSION_BITS_DEPLOYMENTS};
use crate::constants::{COIN, GENESIS_TIME};
use crate::crypto::Hash;

pub const GENESIS_NONCE: u32 = 2;
pub const GENESIS_BITS: u32 = 0x207fffff;
pub const GENESIS_REWARD: i64 = 5000 * COIN;
pub const GENESIS_HASH: &str = "3256ed25f583ba6eeffcb018a4aa9b42723a05e5467092045489bb8d0a20f74d";
pub const GENESIS_MERKLE_ROOT: &str = "3cb802c80aff12c7a774228b53f22e27cbd752ab49bbcc2a5601cdff4ccc7a3c";

pub fn params() -> Result<ChainParams, IntegrityError> {
    let network = Network::Regtest;

    let mut deployments = [Deployment::new(0, 0, 0); MAX_VERSION_BITS_DEPLOYMENTS];
    deployments[DeploymentPos::TestDummy.index()] = Deployment::new(28, 0, NO_TIMEOUT);
    deployments[DeploymentPos::Csv.index()] = Deployment::new(0, 0, NO_TIMEOUT);

    let mut consensus = ConsensusParams {
        hash_genesis_block: Hash::zero(),
        subsidy_halving_interval: 150,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1000,
        bip34_height: -1, // BIP34 has not necessarily activated on regtest
        bip34_hash: Hash::zero(),
        pow_limit: POW_LIMIT_REGTEST,
        pow_target_timespan: 14 * 24 * 60 * 60, // two weeks
        pow_target_spacing: 10 * 60,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        rule_change_activation_threshold: 108, // 75% for testchains
        miner_confirmation_window: 144,
        deployments,
    };

    let message_start = [0xfa, 0xbf, 0xb5, 0xda];

    let genesis = smail_genesis_block(GENESIS_TIME, GENESIS_NONCE, GENESIS_BITS, 1, GENESIS_REWARD);
    consensus.hash_genesis_block = verify_genesis(
        network,
        &genesis,
        hash_literal(GENESIS_HASH),
        hash_literal(GENESIS_MERKLE_ROOT),
    )?;

    let mut params = ChainParams {
        network,
        consensus,
        message_start,
        alert_key: None,
        default_port: 18444,
        max_tip_age: 24 * 60 * 60,
        prune_after_height: 1000,
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![111],
            script_address: vec![196],
            secret_key: vec![239],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        },
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        mining_requires_peers: false,
        default_consistency_checks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        testnet_to_be_deprecated_field_rpc: false,
        checkpoints: CheckpointData::genesis_only(hash_literal(GENESIS_HASH)),
        genesis,
    };

    // Regtest never does real network discovery.
    params.fixed_seeds.clear();
    params.dns_seeds.clear();

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::check_proof_of_work;

    #[test]
    fn test_builds() {
        let params = params().unwrap();
        assert_eq!(params.network_id(), "regtest");
        assert_eq!(params.genesis_hash().to_hex(), GENESIS_HASH);
        assert_eq!(params.genesis.header.merkle_root.to_hex(), GENESIS_MERKLE_ROOT);
    }

    #[test]
    fn test_no_seeds() {
        let params = params().unwrap();
        assert!(params.fixed_seeds.is_empty());
        assert!(params.dns_seeds.is_empty());
    }

    #[test]
    fn test_on_demand_mining() {
        let params = params().unwrap();
        assert!(params.consensus.pow_no_retargeting);
        assert!(params.mine_blocks_on_demand);
        assert!(params.default_consistency_checks);
        assert!(params.alert_key.is_none());
        assert_eq!(params.consensus.miner_confirmation_window, 144);
    }

    #[test]
    fn test_genesis_reward() {
        let params = params().unwrap();
        assert_eq!(params.genesis.transactions[0].total_output_value(), 5000 * COIN);
    }

    #[test]
    fn test_genesis_meets_its_own_target() {
        let params = params().unwrap();
        assert!(check_proof_of_work(
            &params.genesis_hash(),
            params.genesis.header.bits,
            params.consensus.pow_limit
        ));
    }
}
