//! Consensus module - Block and transaction primitives, compact difficulty,
//! and per-network consensus constants

mod block;
mod difficulty;
mod params;
mod script;
mod transaction;

pub use block::*;
pub use difficulty::*;
pub use params::*;
pub use script::*;
pub use transaction::*;
