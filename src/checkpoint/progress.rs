//! Work-weighted estimation of initial block verification progress.

use chrono::{DateTime, Utc};

use crate::{
    block::IndexEntry,
    checkpoint::{CheckpointData, SIGCHECK_VERIFICATION_FACTOR},
    parameters::Network,
};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Guess how far block verification has progressed at `target`, as a work
/// ratio in `[0, 1]`.
///
/// Work is modelled as 1.0 per transaction up to the last checkpoint,
/// which is covered by checkpoint trust, and
/// [`SIGCHECK_VERIFICATION_FACTOR`] per transaction after it, which must
/// be fully verified. Transactions past the chain data we have are
/// extrapolated from the calibrated daily transaction rate.
///
/// Returns 0.0 if `target` is `None`. Returns 1.0 when the model has no
/// work on either side of `target`: nothing done and nothing left reads
/// as done. A `target` timestamped in the future of `now` produces
/// negative estimated remaining work; the linear extrapolation is
/// deliberately not clamped.
pub fn guess_verification_progress(
    network: Network,
    target: Option<&IndexEntry>,
    now: DateTime<Utc>,
) -> f64 {
    let progress = verification_progress(CheckpointData::for_network(network), target, now);

    metrics::gauge!("checkpoint.verified.progress", progress);

    progress
}

/// The work-ratio model behind [`guess_verification_progress`], over an
/// explicit calibration basis.
fn verification_progress(
    data: &CheckpointData,
    target: Option<&IndexEntry>,
    now: DateTime<Utc>,
) -> f64 {
    let target = match target {
        Some(target) => target,
        None => return 0.0,
    };

    let work_before;
    let work_after;

    if target.chain_tx_count <= data.transactions_last_checkpoint {
        // `target` is at or before the checkpoint depth: everything up to
        // it is cheap, the rest of the checkpointed range is cheap, and
        // the extrapolated tail past the checkpoint is expensive.
        let cheap_before = target.chain_tx_count as f64;
        let cheap_after = (data.transactions_last_checkpoint - target.chain_tx_count) as f64;
        let expensive_after = (now - data.time_last_checkpoint).num_seconds() as f64
            / SECONDS_PER_DAY
            * data.transactions_per_day;

        work_before = cheap_before;
        work_after = cheap_after + expensive_after * SIGCHECK_VERIFICATION_FACTOR;
    } else {
        // `target` is past the checkpoint depth: the overshoot is already
        // expensive, and only the extrapolated tail past `target` remains.
        let cheap_before = data.transactions_last_checkpoint as f64;
        let expensive_before =
            (target.chain_tx_count - data.transactions_last_checkpoint) as f64;
        let expensive_after = (now - target.time).num_seconds() as f64 / SECONDS_PER_DAY
            * data.transactions_per_day;

        work_before = cheap_before + expensive_before * SIGCHECK_VERIFICATION_FACTOR;
        work_after = expensive_after * SIGCHECK_VERIFICATION_FACTOR;
    }

    if work_before + work_after == 0.0 {
        return 1.0;
    }

    work_before / (work_before + work_after)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        block::{Hash, Height},
        checkpoint::{data::unix_time, CheckpointList},
        parameters::genesis_hash,
    };

    const CALIBRATION_TIME: i64 = 1_000_000_000;

    /// A synthetic calibration basis: 1000 transactions at the checkpoint,
    /// 100 transactions per day afterwards.
    fn calibration() -> CheckpointData {
        let checkpoints =
            CheckpointList::from_list([(Height(0), genesis_hash(Network::Mainnet))])
                .expect("test checkpoint list is valid");

        CheckpointData {
            checkpoints,
            time_last_checkpoint: unix_time(CALIBRATION_TIME),
            transactions_last_checkpoint: 1000,
            transactions_per_day: 100.0,
        }
    }

    fn target(chain_tx_count: u64, time: i64) -> IndexEntry {
        IndexEntry {
            height: Height(1),
            hash: Hash([0x11; 32]),
            chain_tx_count,
            time: unix_time(time),
        }
    }

    #[test]
    fn no_target_means_no_progress() {
        assert_eq!(
            guess_verification_progress(Network::Mainnet, None, unix_time(CALIBRATION_TIME)),
            0.0
        );
    }

    #[test]
    fn zero_work_on_both_sides_reads_as_done() {
        let data = CheckpointData {
            transactions_last_checkpoint: 0,
            ..calibration()
        };
        let target = target(0, CALIBRATION_TIME);

        // now == calibration time, so the extrapolated tail is empty too
        let progress = verification_progress(&data, Some(&target), unix_time(CALIBRATION_TIME));
        assert_eq!(progress, 1.0);
    }

    #[test]
    fn progress_before_the_checkpoint_depth() {
        let data = calibration();
        let target = target(500, CALIBRATION_TIME - 86_400);
        let now = unix_time(CALIBRATION_TIME + 86_400);

        // 500 cheap before; 500 cheap + (1 day * 100/day * 5) expensive after
        let progress = verification_progress(&data, Some(&target), now);
        assert!((progress - 500.0 / 1500.0).abs() < 1e-12);
    }

    #[test]
    fn progress_past_the_checkpoint_depth() {
        let data = calibration();
        let now = unix_time(CALIBRATION_TIME + 10 * 86_400);
        let target = target(2000, CALIBRATION_TIME + 9 * 86_400);

        // before: 1000 cheap + 1000 * 5 expensive = 6000
        // after: 1 day * 100/day * 5 = 500
        let progress = verification_progress(&data, Some(&target), now);
        assert!((progress - 6000.0 / 6500.0).abs() < 1e-12);
    }

    #[test]
    fn future_target_timestamps_are_not_clamped() {
        let data = calibration();
        let now = unix_time(CALIBRATION_TIME + 86_400);
        let target = target(2000, CALIBRATION_TIME + 2 * 86_400);

        // negative remaining work pushes the ratio above 1.0
        let progress = verification_progress(&data, Some(&target), now);
        assert!(progress > 1.0);
    }

    #[test]
    fn progress_approaches_one_near_the_tip() {
        let data = calibration();
        let now = unix_time(CALIBRATION_TIME + 30 * 86_400);
        let target = target(1_000_000, CALIBRATION_TIME + 30 * 86_400 - 60);

        let progress = verification_progress(&data, Some(&target), now);
        assert!(progress > 0.99);
        assert!(progress <= 1.0);
    }

    proptest! {
        /// Holding `now`, the target time, and the calibration fixed,
        /// progress never decreases as the target's transaction count
        /// grows toward the tip.
        #[test]
        fn progress_is_monotonic_in_chain_tx_count(a in 0u64..10_000, b in 0u64..10_000) {
            let data = calibration();
            let now = unix_time(CALIBRATION_TIME + 30 * 86_400);
            let target_time = CALIBRATION_TIME + 30 * 86_400 - 3_600;

            let (lower, higher) = if a <= b { (a, b) } else { (b, a) };
            let progress_lower =
                verification_progress(&data, Some(&target(lower, target_time)), now);
            let progress_higher =
                verification_progress(&data, Some(&target(higher, target_time)), now);

            prop_assert!(progress_lower <= progress_higher + f64::EPSILON);
        }
    }
}
