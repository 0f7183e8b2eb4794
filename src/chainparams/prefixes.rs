//! Base58 version prefixes
//!
//! Each network prepends its own version bytes before Base58Check encoding
//! so an address or key from one network is never accepted on another.

use serde::Serialize;

use crate::crypto::base58::{self, AddressError};

/// The five encoded data roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// Version bytes per role for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }

    /// Base58Check-encode `payload` under the prefix for `kind`
    pub fn encode_check(&self, kind: Base58Type, payload: &[u8]) -> String {
        base58::encode_check(self.get(kind), payload)
    }

    /// Decode a Base58Check string and identify its role.
    ///
    /// Longer prefixes are tried first so a four-byte extended-key version
    /// is never mistaken for a one-byte address version.
    pub fn decode_check(&self, text: &str) -> Result<(Base58Type, Vec<u8>), AddressError> {
        let body = base58::decode_check(text)?;

        let mut kinds = Base58Type::ALL;
        kinds.sort_by_key(|kind| std::cmp::Reverse(self.get(*kind).len()));

        kinds
            .into_iter()
            .find(|kind| body.starts_with(self.get(*kind)))
            .map(|kind| (kind, body[self.get(kind).len()..].to_vec()))
            .ok_or(AddressError::UnknownPrefix)
    }
}
