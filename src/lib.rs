//! SmailCoin chain parameters
//!
//! Per-network consensus rules, genesis blocks, address prefixes, peer
//! bootstrap tables and checkpoints, plus the registry that tells the rest
//! of the node which network it is running on.
//!
//! ```no_run
//! let params = smail_params::chainparams::select_params("regtest")?;
//! assert_eq!(params.default_port, 18444);
//! # Ok::<(), smail_params::chainparams::ParamsError>(())
//! ```

pub mod chainparams;
pub mod consensus;
pub mod crypto;
pub mod mining;
pub mod p2p;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    use crate::consensus::Amount;

    /// Base units per coin (8 decimal places)
    pub const COIN: Amount = 100_000_000;

    /// Genesis timestamp shared by every network (2017-02-19)
    pub const GENESIS_TIME: u32 = 1_487_525_093;

    /// Embedded in the genesis coinbase scriptSig
    pub const GENESIS_MESSAGE: &str = "February 19 2017 Genesis SmailCoin";

    /// Uncompressed public key paid by every genesis output
    pub const GENESIS_OUTPUT_PUBKEY_HEX: &str = "046c475bddaae375664b58ed429616f6ef669d340e3c36f796a99f5d6b3a8e70c2566976d39f2e286452a9d598a64513211c3658ff1d580247f9e0a0d608638af1";

    /// Key that signs network alerts on main and test
    pub const ALERT_PUBKEY_HEX: &str = "04fbe018bca155f2cd40b941ba01856681dd1b44b4248e3ba91df33e42aee861d64b8724ffbdc480dadbe8571dfacc522c47da6314ac59851ed257784674d8a942";

    /// First scriptSig push of the genesis coinbase (0x1d00ffff)
    pub const GENESIS_COINBASE_BITS: i64 = 486_604_799;

    /// Second scriptSig push of the genesis coinbase
    pub const GENESIS_COINBASE_EXTRA_NONCE: i64 = 4;
}
