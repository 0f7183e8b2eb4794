//! Genesis block construction
//!
//! Builds the first block of a chain from literal inputs. The output is
//! byte-for-byte reproducible: the same inputs always give the same hash.

use crate::consensus::{Amount, Block, BlockHeader, Script, Transaction};
use crate::crypto::Hash;
use crate::constants::{GENESIS_COINBASE_BITS, GENESIS_COINBASE_EXTRA_NONCE, GENESIS_MESSAGE, GENESIS_OUTPUT_PUBKEY_HEX};

/// Build a genesis block.
///
/// The single coinbase input spends the null outpoint and carries
/// `message` in its scriptSig after the historical `486604799` and `4`
/// pushes; its single output pays `reward` to `output_script`. The merkle
/// root is computed over the one-transaction list.
pub fn create_genesis_block(
    message: &[u8],
    output_script: Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Block {
    let script_sig = Script::new()
        .push_int(GENESIS_COINBASE_BITS)
        .push_num(GENESIS_COINBASE_EXTRA_NONCE)
        .push_slice(message);

    let coinbase = Transaction::coinbase(script_sig, reward, output_script);

    let mut block = Block::new(
        BlockHeader::new(version, Hash::zero(), Hash::zero(), time, bits, nonce),
        vec![coinbase],
    );
    block.header.merkle_root = block.compute_merkle_root();
    block
}

/// The pay-to-pubkey script every SmailCoin genesis output uses
pub fn genesis_output_script() -> Script {
    // A malformed literal changes the genesis hash, which verification rejects.
    let pubkey = hex::decode(GENESIS_OUTPUT_PUBKEY_HEX).unwrap_or_default();
    Script::pay_to_pubkey(&pubkey)
}

/// SmailCoin genesis block: fixed message and output script, variable
/// header fields and reward
pub fn smail_genesis_block(time: u32, nonce: u32, bits: u32, version: i32, reward: Amount) -> Block {
    create_genesis_block(
        GENESIS_MESSAGE.as_bytes(),
        genesis_output_script(),
        time,
        nonce,
        bits,
        version,
        reward,
    )
}
