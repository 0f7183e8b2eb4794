//! Mining module - Offline genesis nonce search

mod genesis_miner;

pub use genesis_miner::*;
