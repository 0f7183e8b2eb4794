//! Active network selection
//!
//! Bundles are built at most once per process and shared through `Arc`.
//! Selection happens once during startup; everything afterwards only reads.

use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

use super::{ChainParams, ConfigError, IntegrityError, Network, ParamsError};

type Cached = OnceLock<Result<Arc<ChainParams>, IntegrityError>>;

static MAIN: Cached = OnceLock::new();
static TEST: Cached = OnceLock::new();
static REGTEST: Cached = OnceLock::new();

static GLOBAL: ParamsRegistry = ParamsRegistry::new();

/// Pre-built bundle for `network`, constructed on first use.
fn cached(network: Network) -> Result<Arc<ChainParams>, IntegrityError> {
    let cell = match network {
        Network::Main => &MAIN,
        Network::Test => &TEST,
        Network::Regtest => &REGTEST,
    };
    cell.get_or_init(|| {
        let built = ChainParams::for_network(network).map(Arc::new);
        if let Ok(params) = &built {
            debug!(network = %network, genesis = %params.genesis_hash(), "chain parameters built");
        }
        built
    })
    .clone()
}

/// Holds the currently active bundle
pub struct ParamsRegistry {
    active: RwLock<Option<Arc<ChainParams>>>,
}

impl ParamsRegistry {
    pub const fn new() -> Self {
        Self {
            active: parking_lot::const_rwlock(None),
        }
    }

    /// Make `name` the active network.
    ///
    /// Selecting the already active network again returns the same bundle.
    /// Switching to a different one fails; use [`ParamsRegistry::reselect`].
    pub fn select(&self, name: &str) -> Result<Arc<ChainParams>, ParamsError> {
        let network: Network = name.parse()?;
        let mut active = self.active.write();

        if let Some(current) = active.as_ref() {
            if current.network == network {
                return Ok(Arc::clone(current));
            }
            return Err(ConfigError::AlreadySelected {
                active: current.network_id(),
                requested: network.as_str(),
            }
            .into());
        }

        let params = cached(network)?;
        info!(network = %network, port = params.default_port, "selected chain parameters");
        *active = Some(Arc::clone(&params));
        Ok(params)
    }

    /// Replace the active network unconditionally
    pub fn reselect(&self, name: &str) -> Result<Arc<ChainParams>, ParamsError> {
        let network: Network = name.parse()?;
        let params = cached(network)?;

        let mut active = self.active.write();
        let previous = active.as_ref().map(|p| p.network_id());
        warn!(from = ?previous, to = %network, "re-selecting chain parameters");
        *active = Some(Arc::clone(&params));
        Ok(params)
    }

    /// The active bundle.
    ///
    /// # Panics
    ///
    /// Panics if no network has been selected yet.
    pub fn active(&self) -> Arc<ChainParams> {
        match self.try_active() {
            Some(params) => params,
            None => panic!("chain parameters not selected"),
        }
    }

    pub fn try_active(&self) -> Option<Arc<ChainParams>> {
        self.active.read().clone()
    }

    /// Bundle for `network` without touching the active selection
    pub fn params_for(&self, network: Network) -> Result<Arc<ChainParams>, IntegrityError> {
        cached(network)
    }
}

impl Default for ParamsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Select the process-wide active network
pub fn select_params(name: &str) -> Result<Arc<ChainParams>, ParamsError> {
    GLOBAL.select(name)
}

/// The process-wide active bundle.
///
/// # Panics
///
/// Panics if [`select_params`] has not succeeded yet.
pub fn params() -> Arc<ChainParams> {
    GLOBAL.active()
}

pub fn try_params() -> Option<Arc<ChainParams>> {
    GLOBAL.try_active()
}

pub fn params_for(network: Network) -> Result<Arc<ChainParams>, IntegrityError> {
    GLOBAL.params_for(network)
}
