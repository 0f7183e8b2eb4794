//! Compact difficulty encoding
//!
//! A 32-bit "bits" value packs a 256-bit target as a one-byte exponent and a
//! three-byte mantissa: `target = mantissa * 256^(exponent - 3)`. Bit 23 of
//! the mantissa is a sign bit; negative targets are never valid.
//!
//! Retargeting lives outside this crate; only the encoding and the
//! proof-of-work comparison are provided here.

use primitive_types::U256;
use serde::Serialize;
use std::fmt;

use crate::crypto::Hash;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Compact ("bits") representation of a proof-of-work target
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CompactTarget(pub u32);

/// Result of expanding a compact value, flags included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedTarget {
    pub target: U256,
    pub negative: bool,
    pub overflow: bool,
}

impl CompactTarget {
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn to_consensus(self) -> u32 {
        self.0
    }

    /// Expand to a 256-bit integer, reporting sign and overflow
    pub fn decode(self) -> DecodedTarget {
        let size = self.0 >> 24;
        let mut word = self.0 & MANTISSA_MASK;

        // Mantissa bytes below the exponent are dropped before the flags are read.
        if size <= 3 {
            word >>= 8 * (3 - size);
        }

        let negative = word != 0 && (self.0 & SIGN_BIT) != 0;
        let overflow = word != 0
            && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

        let target = if overflow {
            U256::zero()
        } else if size <= 3 {
            U256::from(word)
        } else {
            U256::from(word) << (8 * (size - 3) as usize)
        };

        DecodedTarget {
            target,
            negative,
            overflow,
        }
    }

    /// The target a block hash must not exceed, or `None` when the
    /// encoding is negative, overflows, or is zero
    pub fn to_target(self) -> Option<U256> {
        let decoded = self.decode();
        if decoded.negative || decoded.overflow || decoded.target.is_zero() {
            None
        } else {
            Some(decoded.target)
        }
    }

    /// Compress a target, truncating the mantissa to three bytes
    pub fn from_target(target: U256) -> Self {
        let mut size = (target.bits() + 7) / 8;
        let mut compact = if size <= 3 {
            (target.low_u64() << (8 * (3 - size))) as u32
        } else {
            (target >> (8 * (size - 3))).low_u64() as u32
        };

        // A set sign bit would read back as negative; shift into the exponent.
        if compact & SIGN_BIT != 0 {
            compact >>= 8;
            size += 1;
        }

        Self(compact | ((size as u32) << 24))
    }
}

impl fmt::Debug for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactTarget({:#010x})", self.0)
    }
}

impl fmt::Display for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<u32> for CompactTarget {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

/// Check whether `hash` satisfies the proof of work claimed by `bits`.
///
/// The claimed target must be well-formed and no easier than `pow_limit`.
pub fn check_proof_of_work(hash: &Hash, bits: u32, pow_limit: U256) -> bool {
    match CompactTarget(bits).to_target() {
        Some(target) if target <= pow_limit => meets_target(hash, target),
        _ => false,
    }
}

/// Compare hash to target (hash <= target)
pub fn meets_target(hash: &Hash, target: U256) -> bool {
    hash.to_u256() <= target
}
