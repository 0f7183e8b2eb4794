//! Cryptography module - SHA-256d hashing, Merkle roots, Base58Check, alert keys

mod hash;
mod merkle;
mod alert;
pub mod base58;

pub use hash::*;
pub use merkle::*;
pub use alert::*;
pub use base58::AddressError;
