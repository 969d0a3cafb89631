//! Hard-coded checkpoint data for Bitcoin-family nodes, and the checks
//! built on it.
//!
//! Each checkpoint consists of a block height and block header hash,
//! asserted as canonical for one network. The host node uses them to:
//! - reject chain branches that disagree with a checkpoint, via
//!   [`checkpoint::check_block`],
//! - estimate how far initial block verification has progressed, via
//!   [`checkpoint::guess_verification_progress`],
//! - find the deepest checkpoint it already has on disk, via
//!   [`checkpoint::last_checkpoint`], and report table extrema via
//!   [`checkpoint::total_blocks_estimate`] and
//!   [`checkpoint::latest_hardened_checkpoint`].
//!
//! The tables are built once from data embedded in the crate, and are
//! read-only afterwards, so they can be shared between threads without
//! locking. Updating the checkpoint list is a data change to the embedded
//! files, never a code change.

#![forbid(unsafe_code)]

pub mod block;
pub mod checkpoint;
pub mod config;
pub mod parameters;

pub use config::Config;

/// A boxed [`std::error::Error`], used when parsing and validating the
/// hard-coded checkpoint data.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
