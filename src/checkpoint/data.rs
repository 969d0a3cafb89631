//! Per-network checkpoint data and sync calibration.

use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;

use crate::{checkpoint::CheckpointList, parameters::Network};

/// How many times we expect transactions after the last checkpoint to
/// be slower. This number is a compromise, as it can't be accurate for
/// every system. When reindexing from a fast disk with a slow CPU, it
/// can be up to 20, while when downloading from a slow network with a
/// fast multicore CPU, it won't be much higher than 1.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

/// The checkpoint list for one network, together with the calibration
/// basis for sync progress estimation.
///
/// Built once, before first use, and read-only afterwards. The calibration
/// fields describe the chain at the highest checkpoint height as of the
/// release that shipped the list; their consistency with actual chain
/// state is an input contract, not checked here.
#[derive(Clone, Debug)]
pub struct CheckpointData {
    /// The hard-coded checkpoints for this network.
    pub checkpoints: CheckpointList,

    /// The header time of the highest checkpointed block.
    pub time_last_checkpoint: DateTime<Utc>,

    /// The cumulative number of transactions in the chain, up to and
    /// including the highest checkpointed block.
    pub transactions_last_checkpoint: u64,

    /// The estimated number of transactions per day after the highest
    /// checkpointed block.
    pub transactions_per_day: f64,
}

static MAINNET_CHECKPOINT_DATA: Lazy<CheckpointData> = Lazy::new(|| CheckpointData {
    checkpoints: CheckpointList::new(Network::Mainnet),
    time_last_checkpoint: unix_time(1_507_133_860),
    transactions_last_checkpoint: 125_908,
    transactions_per_day: 1000.0,
});

static TESTNET_CHECKPOINT_DATA: Lazy<CheckpointData> = Lazy::new(|| CheckpointData {
    checkpoints: CheckpointList::new(Network::Testnet),
    time_last_checkpoint: unix_time(1_394_545_201),
    transactions_last_checkpoint: 0,
    transactions_per_day: 100.0,
});

impl CheckpointData {
    /// Returns the hard-coded checkpoint data for `network`.
    pub fn for_network(network: Network) -> &'static CheckpointData {
        match network {
            Network::Mainnet => &MAINNET_CHECKPOINT_DATA,
            Network::Testnet => &TESTNET_CHECKPOINT_DATA,
        }
    }
}

/// Converts a unix timestamp in seconds to a UTC datetime.
pub(crate) fn unix_time(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_utc(NaiveDateTime::from_timestamp(secs, 0), Utc)
}
