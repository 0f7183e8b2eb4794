//! P2P networking module - Bootstrap peer tables

mod seeds;

pub use seeds::*;
