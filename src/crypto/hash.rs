//! SHA-256d hashing
//!
//! Block, transaction and merkle hashing all use double SHA-256. Digests are
//! stored in the order SHA-256 produces them and displayed byte-reversed,
//! which is how block explorers and the hard-coded genesis literals print them.

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte hash output
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// The null hash (genesis previous-block hash, null outpoint)
    pub const fn zero() -> Self {
        Hash([0u8; 32])
    }

    /// Create hash from raw digest bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Parse a hash from its display (byte-reversed) hex form.
    ///
    /// An optional `0x` prefix is accepted.
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        arr.reverse();
        Ok(Hash(arr))
    }

    /// Display (byte-reversed) hex form
    pub fn to_hex(&self) -> String {
        let mut display = self.0;
        display.reverse();
        hex::encode(display)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Interpret the digest as a little-endian 256-bit integer, the form
    /// compared against proof-of-work targets.
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Hash::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

/// Single SHA-256
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice, the digest used for blocks and transactions
pub fn double_sha256(data: &[u8]) -> Hash {
    Hash(sha256(&sha256(data)))
}

/// Hash two hashes together (for Merkle tree)
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left.0);
    data.extend_from_slice(&right.0);
    double_sha256(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let data = b"hello world";
        assert_eq!(double_sha256(data), double_sha256(data));
    }

    #[test]
    fn test_hash_different_inputs() {
        assert_ne!(double_sha256(b"hello"), double_sha256(b"world"));
    }

    #[test]
    fn test_known_double_sha256() {
        // sha256d("") in display order
        let hash = double_sha256(b"");
        assert_eq!(
            hash.to_hex(),
            "56944c5d3f98413ef45cf54545538103cc9f298e0575820ad3591376e2e0f65d"
        );
    }

    #[test]
    fn test_zero_hash() {
        let zero = Hash::zero();
        assert_eq!(zero.0, [0u8; 32]);
        assert!(zero.is_zero());
        assert_eq!(zero.to_u256(), U256::zero());
    }

    #[test]
    fn test_hex_is_byte_reversed() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        let hash = Hash(bytes);
        assert!(hash.to_hex().ends_with("ab"));
        assert_eq!(Hash::from_hex(&hash.to_hex()).unwrap(), hash);
    }

    #[test]
    fn test_from_hex_accepts_prefix() {
        let plain = "000000da8917eec0c6dc3e610bc81dd0d7b52d0adbc88125c30b63eaada7c1dd";
        let prefixed = format!("0x{}", plain);
        assert_eq!(Hash::from_hex(plain).unwrap(), Hash::from_hex(&prefixed).unwrap());
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(Hash::from_hex("abcd").is_err());
    }

    #[test]
    fn test_u256_ordering_follows_display() {
        let small = Hash::from_hex("000000da8917eec0c6dc3e610bc81dd0d7b52d0adbc88125c30b63eaada7c1dd").unwrap();
        let large = Hash::from_hex("3256ed25f583ba6eeffcb018a4aa9b42723a05e5467092045489bb8d0a20f74d").unwrap();
        assert!(small.to_u256() < large.to_u256());
    }

    #[test]
    fn test_serde_uses_display_hex() {
        let hash = double_sha256(b"test");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", hash.to_hex()));
        let back: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }

    #[test]
    fn test_hash_pair() {
        let left = double_sha256(b"left");
        let right = double_sha256(b"right");
        assert_eq!(hash_pair(&left, &right), hash_pair(&left, &right));
        assert_ne!(hash_pair(&left, &right), hash_pair(&right, &left));
    }
}
