//! Consensus rule constants for one network
//!
//! Pure data; the engines that interpret these values (retargeting, BIP9
//! state tracking, block validation) consume them read-only.

use primitive_types::U256;
use serde::Serialize;

use crate::crypto::Hash;

/// Version bits in the top three bits of `nVersion` mark BIP9 signalling
pub const VERSIONBITS_TOP_BITS: i32 = 0x2000_0000;
pub const VERSIONBITS_TOP_MASK: u32 = 0xE000_0000;

/// Highest bit index a deployment may occupy
pub const VERSIONBITS_MAX_BIT: u8 = 28;

/// Soft-fork deployments tracked through version bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentPos {
    TestDummy,
    /// BIP68, BIP112 and BIP113
    Csv,
}

/// Number of entries in the deployment table
pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 2;

impl DeploymentPos {
    pub const ALL: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] =
        [DeploymentPos::TestDummy, DeploymentPos::Csv];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Csv => "csv",
        }
    }
}

/// One soft-fork deployment window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deployment {
    /// Bit position in the block version (0..=28)
    pub bit: u8,
    /// Median time past at which signalling may begin
    pub start_time: i64,
    /// Median time past after which the deployment fails if not locked in
    pub timeout: i64,
}

impl Deployment {
    /// Panics (at compile time in const context) when `bit` is out of range
    pub const fn new(bit: u8, start_time: i64, timeout: i64) -> Self {
        assert!(bit <= VERSIONBITS_MAX_BIT, "deployment bit out of range");
        Self {
            bit,
            start_time,
            timeout,
        }
    }

    /// The bit this deployment sets in a block version
    pub const fn mask(&self) -> u32 {
        1u32 << self.bit
    }

    /// Whether `version` uses BIP9 encoding and sets this deployment's bit
    pub fn is_signalled_by(&self, version: i32) -> bool {
        let version = version as u32;
        (version & VERSIONBITS_TOP_MASK) == VERSIONBITS_TOP_BITS as u32
            && (version & self.mask()) != 0
    }
}

/// Block version signalling every deployment in `positions`
pub fn signalling_version(params: &ConsensusParams, positions: &[DeploymentPos]) -> i32 {
    positions.iter().fold(VERSIONBITS_TOP_BITS, |version, pos| {
        version | params.deployment(*pos).mask() as i32
    })
}

/// Consensus parameters for one network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusParams {
    pub hash_genesis_block: Hash,
    pub subsidy_halving_interval: u32,
    /// Blocks with a new version needed (out of `majority_window`) to enforce upgraded rules
    pub majority_enforce_block_upgrade: u32,
    /// Blocks with a new version needed to reject outdated blocks
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,
    /// Height at which BIP34 activates; -1 when it has not necessarily activated
    pub bip34_height: i32,
    pub bip34_hash: Hash,
    /// Loosest target a block may claim
    pub pow_limit: U256,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    pub pow_target_spacing: i64,
    pub pow_target_timespan: i64,
    /// Blocks (out of `miner_confirmation_window`) needed to lock in a deployment
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: [Deployment; MAX_VERSION_BITS_DEPLOYMENTS],
}

impl ConsensusParams {
    pub fn deployment(&self, pos: DeploymentPos) -> &Deployment {
        &self.deployments[pos.index()]
    }

    /// Blocks between difficulty retargets
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }
}
