//! Hard-coded checkpoint tables and the checks built on them.
//!
//! Each checkpoint consists of a block height and block header hash.
//! Checkpoints assert canonical history: a block at a checkpointed height
//! with a different hash belongs to a chain branch the node must reject.
//!
//! The tables also carry calibration data used to estimate how far initial
//! block verification has progressed, and to find the deepest checkpoint
//! the host already has in its block index.

mod check;
mod data;
mod list;
mod progress;

pub use check::{check_block, last_checkpoint, latest_hardened_checkpoint, total_blocks_estimate};
pub use data::{CheckpointData, SIGCHECK_VERIFICATION_FACTOR};
pub use list::CheckpointList;
pub use progress::guess_verification_progress;
