//! Checkpoint table
//!
//! Known-good block hashes at fixed heights, plus transaction statistics at
//! the last checkpoint for estimating sync progress.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::crypto::Hash;

/// Signature checks make blocks past the last checkpoint this many times
/// more expensive to verify than blocks before it
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointData {
    /// Height -> expected block hash
    pub map: BTreeMap<u32, Hash>,
    /// UNIX timestamp of the last checkpoint block
    pub time_last_checkpoint: i64,
    /// Total transactions up to and including the last checkpoint
    pub transactions_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointData {
    /// A table holding only the genesis block, with no statistics
    pub fn genesis_only(genesis_hash: Hash) -> Self {
        Self {
            map: BTreeMap::from([(0, genesis_hash)]),
            time_last_checkpoint: 0,
            transactions_last_checkpoint: 0,
            transactions_per_day: 0.0,
        }
    }

    /// `false` only when a checkpoint exists at `height` and names a different hash
    pub fn check_block(&self, height: u32, hash: &Hash) -> bool {
        self.map.get(&height).map_or(true, |expected| expected == hash)
    }

    pub fn last_checkpoint_height(&self) -> Option<u32> {
        self.map.keys().next_back().copied()
    }

    /// Rough fraction (0.0..=1.0) of verification work done once the chain
    /// tip has `chain_tx` transactions and timestamp `tip_time`.
    pub fn guess_verification_progress(&self, chain_tx: u64, tip_time: i64, now: i64, sigchecks: bool) -> f64 {
        let factor = if sigchecks { SIGCHECK_VERIFICATION_FACTOR } else { 1.0 };
        let per_day = self.transactions_per_day;

        let (work_before, work_after) = if chain_tx <= self.transactions_last_checkpoint {
            let cheap_before = chain_tx as f64;
            let cheap_after = (self.transactions_last_checkpoint - chain_tx) as f64;
            let expensive_after = now.saturating_sub(self.time_last_checkpoint) as f64 / SECONDS_PER_DAY * per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = self.transactions_last_checkpoint as f64;
            let expensive_before = (chain_tx - self.transactions_last_checkpoint) as f64;
            let expensive_after = now.saturating_sub(tip_time) as f64 / SECONDS_PER_DAY * per_day;
            (cheap_before + expensive_before * factor, expensive_after * factor)
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 0.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::double_sha256;

    fn sample() -> CheckpointData {
        CheckpointData {
            map: BTreeMap::from([(0, double_sha256(b"0")), (100, double_sha256(b"100"))]),
            time_last_checkpoint: 1_000_000,
            transactions_last_checkpoint: 1_000,
            transactions_per_day: 100.0,
        }
    }

    #[test]
    fn test_check_block() {
        let data = sample();
        assert!(data.check_block(100, &double_sha256(b"100")));
        assert!(!data.check_block(100, &double_sha256(b"other")));
        // heights without a checkpoint are unconstrained
        assert!(data.check_block(50, &double_sha256(b"anything")));
    }

    #[test]
    fn test_last_checkpoint_height() {
        assert_eq!(sample().last_checkpoint_height(), Some(100));
        let genesis = CheckpointData::genesis_only(Hash::zero());
        assert_eq!(genesis.last_checkpoint_height(), Some(0));
    }

    #[test]
    fn test_progress_before_checkpoint() {
        let data = sample();
        // at the checkpoint, one day later: 1000 cheap before, 100 * 5 after
        let now = data.time_last_checkpoint + 86_400;
        let progress = data.guess_verification_progress(1_000, data.time_last_checkpoint, now, true);
        assert!((progress - 1_000.0 / 1_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_after_checkpoint_at_tip() {
        let data = sample();
        let now = 2_000_000;
        let progress = data.guess_verification_progress(1_200, now, now, true);
        assert!((progress - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_is_monotonic_in_chain_tx() {
        let data = sample();
        let now = data.time_last_checkpoint + 86_400;
        let early = data.guess_verification_progress(100, 0, now, false);
        let late = data.guess_verification_progress(900, 0, now, false);
        assert!(early < late);
    }

    #[test]
    fn test_progress_with_no_statistics() {
        let data = CheckpointData::genesis_only(Hash::zero());
        assert_eq!(data.guess_verification_progress(0, 0, 100, true), 0.0);
        assert_eq!(data.guess_verification_progress(10, 100, 100, true), 1.0);
    }

    #[test]
    fn test_progress_extreme_timestamps() {
        let data = sample();
        let far_future = data.guess_verification_progress(1_200, i64::MIN, i64::MAX, true);
        let far_past = data.guess_verification_progress(500, 0, i64::MIN, true);
        for progress in [far_future, far_past] {
            assert!((0.0..=1.0).contains(&progress), "progress {}", progress);
        }
    }
}
