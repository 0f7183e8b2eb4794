//! Network alert key
//!
//! Main and test networks carry a secp256k1 public key whose holder may sign
//! network-wide alert messages. The signature is ECDSA (DER encoded) over the
//! double-SHA-256 of the serialized alert payload.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, VerifyingKey};
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::double_sha256;

/// Alert key errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertKeyError {
    #[error("Invalid hex in alert key: {0}")]
    InvalidHex(String),
    #[error("Alert key is not a valid secp256k1 point")]
    InvalidPoint,
}

/// SEC1-encoded secp256k1 public key authorised to sign alerts
#[derive(Clone, PartialEq, Eq)]
pub struct AlertKey {
    encoded: Vec<u8>,
    key: VerifyingKey,
}

impl AlertKey {
    /// Parse and validate a SEC1 public key (compressed or uncompressed)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AlertKeyError> {
        let key = VerifyingKey::from_sec1_bytes(bytes).map_err(|_| AlertKeyError::InvalidPoint)?;
        Ok(Self {
            encoded: bytes.to_vec(),
            key,
        })
    }

    pub fn from_hex(hex: &str) -> Result<Self, AlertKeyError> {
        let bytes = hex::decode(hex).map_err(|e| AlertKeyError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// The key exactly as it was supplied
    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded
    }

    /// Verify a DER signature over `sha256d(payload)`.
    ///
    /// High-S signatures are accepted by normalizing them first.
    pub fn verify(&self, payload: &[u8], der_signature: &[u8]) -> bool {
        let sig = match Signature::from_der(der_signature) {
            Ok(s) => s,
            Err(_) => return false,
        };
        let sig = sig.normalize_s().unwrap_or(sig);

        let digest = double_sha256(payload);
        self.key.verify_prehash(&digest.0, &sig).is_ok()
    }
}

impl std::fmt::Debug for AlertKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AlertKey({})", hex::encode(&self.encoded))
    }
}

impl Serialize for AlertKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.encoded))
    }
}
