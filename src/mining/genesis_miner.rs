//! Offline genesis nonce search
//!
//! Finds a nonce for which a block header satisfies the target encoded in
//! its own `bits`. Used when minting a new network's genesis literals; the
//! registry never mines.

use crate::consensus::{meets_target, Block, CompactTarget};
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Mining result
#[derive(Debug)]
pub enum MiningResult {
    /// Header now carries a valid nonce
    Success(Block),
    /// Mining was interrupted
    Interrupted,
    /// Every nonce in the range was tried
    Exhausted,
    /// The header's `bits` do not encode a usable target
    InvalidTarget,
}

/// Nonce searcher with a shared stop flag
#[derive(Clone, Default)]
pub struct GenesisMiner {
    stop_signal: Arc<AtomicBool>,
}

impl GenesisMiner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a stop signal handle
    pub fn stop_signal(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_signal)
    }

    /// Stop mining
    pub fn stop(&self) {
        self.stop_signal.store(true, Ordering::SeqCst);
    }

    /// Reset stop signal
    pub fn reset(&self) {
        self.stop_signal.store(false, Ordering::SeqCst);
    }

    /// Search from `start_nonce` up to `u32::MAX`
    pub fn mine(&self, block: Block, start_nonce: u32) -> MiningResult {
        self.mine_range(block, start_nonce..=u32::MAX)
    }

    /// Search a bounded nonce range
    pub fn mine_range(&self, block: Block, nonces: RangeInclusive<u32>) -> MiningResult {
        self.mine_with_progress(block, nonces, 0, |_| {})
    }

    /// Search `nonces`, calling `callback` with the number of hashes tried
    /// every `progress_interval` attempts (0 disables progress reports)
    pub fn mine_with_progress<F>(
        &self,
        mut block: Block,
        nonces: RangeInclusive<u32>,
        progress_interval: u64,
        mut callback: F,
    ) -> MiningResult
    where
        F: FnMut(u64),
    {
        let target = match CompactTarget::new(block.header.bits).to_target() {
            Some(target) => target,
            None => return MiningResult::InvalidTarget,
        };
        let mut iterations = 0u64;

        for nonce in nonces {
            if self.stop_signal.load(Ordering::SeqCst) {
                return MiningResult::Interrupted;
            }

            block.header.nonce = nonce;
            if meets_target(&block.header.hash(), target) {
                return MiningResult::Success(block);
            }

            iterations += 1;
            if progress_interval > 0 && iterations % progress_interval == 0 {
                callback(iterations);
            }
        }

        MiningResult::Exhausted
    }
}

/// Split the nonce space into `workers` disjoint ranges starting at `start`
pub fn partition_nonces(start: u32, workers: u32) -> Vec<RangeInclusive<u32>> {
    let total = u64::from(u32::MAX - start) + 1;
    let workers = u64::from(workers).clamp(1, total);
    let span = total / workers;
    (0..workers)
        .map(|i| {
            let lo = u64::from(start) + i * span;
            let hi = if i + 1 == workers { u64::from(u32::MAX) } else { lo + span - 1 };
            (lo as u32)..=(hi as u32)
        })
        .collect()
}
