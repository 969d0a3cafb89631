//! Checkpoint policy checks.
//!
//! These functions are guards, not chain selection: a `false` result from
//! [`check_block`] means the caller must reject the block and the chain
//! branch it extends.

use std::collections::HashMap;

use crate::{
    block::{self, IndexEntry},
    checkpoint::CheckpointData,
    parameters::Network,
};

/// Returns true if a block at `height` with header hash `hash` is
/// consistent with the hard-coded checkpoints for `network`.
///
/// Heights without a checkpoint always pass: checkpoints have no opinion
/// outside their own heights. Testnet has no enforced checkpoints, and
/// enforcement can be switched off via
/// [`Config::enforce_checkpoints`](crate::Config::enforce_checkpoints).
pub fn check_block(
    network: Network,
    checkpoints_enabled: bool,
    height: block::Height,
    hash: block::Hash,
) -> bool {
    if network == Network::Testnet {
        return true;
    }
    if !checkpoints_enabled {
        return true;
    }

    let checkpoints = &CheckpointData::for_network(network).checkpoints;

    match checkpoints.hash(height) {
        Some(checkpoint_hash) if checkpoint_hash == hash => true,
        Some(checkpoint_hash) => {
            tracing::warn!(
                ?height,
                candidate = ?hash,
                checkpoint = ?checkpoint_hash,
                "block hash conflicts with a hard-coded checkpoint",
            );
            false
        }
        None => true,
    }
}

/// Returns the height of the highest checkpoint for `network`, as a lower
/// bound on the number of blocks a full sync will verify.
///
/// Returns `Height(0)` on testnet, or when checkpoint enforcement is
/// disabled.
pub fn total_blocks_estimate(network: Network, checkpoints_enabled: bool) -> block::Height {
    if network == Network::Testnet || !checkpoints_enabled {
        return block::Height(0);
    }

    CheckpointData::for_network(network).checkpoints.max_height()
}

/// Returns the highest checkpointed block the host already has in `index`,
/// usable as a safe rewind or anchor boundary.
///
/// Returns `None` on testnet, when enforcement is disabled, or when no
/// checkpoint hash is present in `index`. The caller must hold `index`
/// stable for the duration of the call; this function does no
/// synchronization of its own.
pub fn last_checkpoint<'a>(
    network: Network,
    checkpoints_enabled: bool,
    index: &'a HashMap<block::Hash, IndexEntry>,
) -> Option<&'a IndexEntry> {
    if network == Network::Testnet || !checkpoints_enabled {
        return None;
    }

    let checkpoints = &CheckpointData::for_network(network).checkpoints;

    let found = checkpoints
        .iter_descending()
        .find_map(|(_height, hash)| index.get(&hash));

    tracing::debug!(?network, anchor = ?found.map(|entry| entry.height), "resolved deepest local checkpoint");

    found
}

/// Returns the hash of the highest checkpoint for `network`: the hardened
/// checkpoint.
///
/// Not gated by the enforcement flag; the hardened checkpoint is always
/// reported for the selected network.
pub fn latest_hardened_checkpoint(network: Network) -> block::Hash {
    let (_height, hash) = CheckpointData::for_network(network).checkpoints.max_checkpoint();
    hash
}
