//! Base58Check encoding
//!
//! `base58(prefix || payload || sha256d(prefix || payload)[0..4])`

use thiserror::Error;

use super::double_sha256;

/// Length of the trailing checksum
pub const CHECKSUM_LEN: usize = 4;

/// Base58Check decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Invalid base58 string: {0}")]
    InvalidBase58(String),
    #[error("Encoded data too short: {0} bytes")]
    TooShort(usize),
    #[error("Checksum mismatch")]
    BadChecksum,
    #[error("Prefix does not match any known version bytes")]
    UnknownPrefix,
}

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = double_sha256(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest.0[..CHECKSUM_LEN]);
    out
}

/// Encode `prefix || payload` with a 4-byte double-SHA-256 checksum
pub fn encode_check(prefix: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);
    let sum = checksum(&data);
    data.extend_from_slice(&sum);
    bs58::encode(data).into_string()
}

/// Decode a Base58Check string, returning the checksummed body
/// (version bytes and payload, checksum stripped)
pub fn decode_check(text: &str) -> Result<Vec<u8>, AddressError> {
    let mut data = bs58::decode(text)
        .into_vec()
        .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;

    if data.len() < CHECKSUM_LEN {
        return Err(AddressError::TooShort(data.len()));
    }

    let body_len = data.len() - CHECKSUM_LEN;
    if checksum(&data[..body_len]) != data[body_len..] {
        return Err(AddressError::BadChecksum);
    }

    data.truncate(body_len);
    Ok(data)
}
