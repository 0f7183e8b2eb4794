//! Transaction structure
//!
//! Legacy (pre-segwit) layout. The serialization here is what the
//! transaction hash, and therefore the genesis merkle root, commits to.

use serde::Serialize;

use super::Script;
use crate::crypto::{double_sha256, Hash};

/// Amount in base units (1 coin = `COIN` units)
pub type Amount = i64;

/// Output index marking a null outpoint (no real input)
pub const NULL_OUTPOINT_INDEX: u32 = 0xFFFF_FFFF;

/// Sequence number of a final input
pub const SEQUENCE_FINAL: u32 = 0xFFFF_FFFF;

/// Reference to a previous transaction output
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

impl OutPoint {
    /// The outpoint spent by coinbase inputs
    pub const fn null() -> Self {
        Self {
            hash: Hash::zero(),
            index: NULL_OUTPOINT_INDEX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.hash.is_zero() && self.index == NULL_OUTPOINT_INDEX
    }
}

/// A transaction input
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TxInput {
    pub prevout: OutPoint,
    /// Unlock script; for a coinbase, arbitrary data
    pub script_sig: Script,
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TxOutput {
    pub value: Amount,
    pub script_pubkey: Script,
}

/// A complete transaction
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
}

impl Transaction {
    /// Create a coinbase transaction carrying `script_sig` as its input data
    pub fn coinbase(script_sig: Script, value: Amount, script_pubkey: Script) -> Self {
        Self {
            version: 1,
            inputs: vec![TxInput {
                prevout: OutPoint::null(),
                script_sig,
                sequence: SEQUENCE_FINAL,
            }],
            outputs: vec![TxOutput {
                value,
                script_pubkey,
            }],
            lock_time: 0,
        }
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    /// Calculate transaction hash
    pub fn hash(&self) -> Hash {
        double_sha256(&self.to_bytes())
    }

    /// Wire serialization
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prevout.hash.0);
            bytes.extend_from_slice(&input.prevout.index.to_le_bytes());
            write_script(&mut bytes, &input.script_sig);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_script(&mut bytes, &output.script_pubkey);
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());

        bytes
    }

    /// Calculate total output value
    pub fn total_output_value(&self) -> Amount {
        self.outputs.iter().map(|o| o.value).sum()
    }
}

fn write_script(out: &mut Vec<u8>, script: &Script) {
    write_compact_size(out, script.len() as u64);
    out.extend_from_slice(script.as_bytes());
}

/// Variable-length integer prefix used for vector and script lengths
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_coinbase(value: Amount) -> Transaction {
        Transaction::coinbase(
            Script::new().push_slice(b"coinbase data"),
            value,
            Script::pay_to_pubkey(&[0x02; 33]),
        )
    }

    #[test]
    fn test_coinbase_detection() {
        assert!(sample_coinbase(5000).is_coinbase());

        let mut regular = sample_coinbase(5000);
        regular.inputs[0].prevout.index = 0;
        assert!(!regular.is_coinbase());
    }

    #[test]
    fn test_transaction_hash_deterministic() {
        let tx = sample_coinbase(5000);
        assert_eq!(tx.hash(), tx.hash());
    }

    #[test]
    fn test_value_changes_hash() {
        assert_ne!(sample_coinbase(1).hash(), sample_coinbase(2).hash());
    }

    #[test]
    fn test_serialized_layout() {
        let tx = sample_coinbase(0);
        let bytes = tx.to_bytes();
        // version, one input, null prevout
        assert_eq!(&bytes[..4], &1i32.to_le_bytes());
        assert_eq!(bytes[4], 1);
        assert_eq!(&bytes[5..37], &[0u8; 32]);
        assert_eq!(&bytes[37..41], &[0xff; 4]);
        // lock time closes the transaction
        assert_eq!(&bytes[bytes.len() - 4..], &[0u8; 4]);
    }

    #[test]
    fn test_compact_size_boundaries() {
        let cases: [(u64, &[u8]); 4] = [
            (0xfc, &[0xfc]),
            (0xfd, &[0xfd, 0xfd, 0x00]),
            (0x1_0000, &[0xfe, 0x00, 0x00, 0x01, 0x00]),
            (0x1_0000_0000, &[0xff, 0, 0, 0, 0, 1, 0, 0, 0]),
        ];
        for (n, expected) in cases {
            let mut out = Vec::new();
            write_compact_size(&mut out, n);
            assert_eq!(out, expected, "compact size of {n:#x}");
        }
    }

    #[test]
    fn test_output_value_calculation() {
        let mut tx = sample_coinbase(100);
        tx.outputs.push(TxOutput {
            value: 200,
            script_pubkey: Script::new(),
        });
        assert_eq!(tx.total_output_value(), 300);
    }
}
