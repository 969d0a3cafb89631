//! Checkpoint lists for checkpoint-based chain validation
//!
//! Each checkpoint consists of a block height and block header hash.
//! Lists are parsed from text embedded in the crate, so adding a
//! checkpoint for a new release is a data change, not a code change.


use std::{
    collections::{BTreeMap, HashSet},
    str::FromStr,
};

use crate::{
    block,
    parameters::{genesis_hash, Network},
    BoxError,
};

/// The hard-coded checkpoints for mainnet.
///
/// Each line holds one `height hash` pair. Checkpoint blocks should be
/// buried deep enough that they cannot be reorganized away, be surrounded
/// by blocks with reasonable timestamps, and contain no strange
/// transactions.
const MAINNET_CHECKPOINTS: &str = include_str!("main-checkpoints.txt");

/// The hard-coded checkpoints for testnet.
///
/// Testnet checkpoints are kept for anchor reporting only; they are never
/// enforced during validation.
const TESTNET_CHECKPOINTS: &str = include_str!("test-checkpoints.txt");

/// A list of block height and hash checkpoints.
///
/// Checkpoints should be chosen to avoid forks or chain reorganizations,
/// which only happen in the last few hundred blocks in the chain.
///
/// This is actually a bijective map, but since it is read-only, we use a
/// BTreeMap, and do the value uniqueness check on initialisation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CheckpointList(BTreeMap<block::Height, block::Hash>);

impl FromStr for CheckpointList {
    type Err = BoxError;

    /// Parse a string into a CheckpointList.
    ///
    /// Each line has one checkpoint, consisting of a [`block::Height`] and
    /// [`block::Hash`], separated by a single space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut checkpoint_list: Vec<(block::Height, block::Hash)> = Vec::new();

        for checkpoint in s.lines() {
            let fields = checkpoint.split(' ').collect::<Vec<_>>();
            if let [height, hash] = fields[..] {
                checkpoint_list.push((height.parse()?, hash.parse()?));
            } else {
                Err(format!(
                    "invalid checkpoint format: expected 2 space-separated fields but found {}: '{}'",
                    fields.len(),
                    checkpoint
                ))?;
            };
        }

        CheckpointList::from_list(checkpoint_list)
    }
}

impl CheckpointList {
    /// Returns the hard-coded checkpoint list for `network`.
    pub fn new(network: Network) -> Self {
        // parse calls CheckpointList::from_list
        let checkpoint_list: CheckpointList = match network {
            Network::Mainnet => MAINNET_CHECKPOINTS
                .parse()
                .expect("hard-coded Mainnet checkpoint list parses and validates"),
            Network::Testnet => TESTNET_CHECKPOINTS
                .parse()
                .expect("hard-coded Testnet checkpoint list parses and validates"),
        };

        match checkpoint_list.hash(block::Height(0)) {
            Some(hash) if hash == genesis_hash(network) => checkpoint_list,
            Some(_) => {
                panic!("the hard-coded genesis checkpoint does not match the network genesis hash")
            }
            None => unreachable!("parser should have checked for a missing genesis checkpoint"),
        }
    }

    /// Create a new checkpoint list from `list`.
    ///
    /// Checkpoint heights and checkpoint hashes must be unique, and there
    /// must be a checkpoint for a genesis block at height 0. (All other
    /// checkpoints are optional.)
    pub(crate) fn from_list(
        list: impl IntoIterator<Item = (block::Height, block::Hash)>,
    ) -> Result<Self, BoxError> {
        // BTreeMap silently ignores duplicates, so we count the checkpoints
        // before adding them to the map
        let original_checkpoints: Vec<(block::Height, block::Hash)> = list.into_iter().collect();
        let original_len = original_checkpoints.len();

        let checkpoints: BTreeMap<block::Height, block::Hash> =
            original_checkpoints.into_iter().collect();

        // Check that the list starts with the correct genesis block
        match checkpoints.iter().next() {
            Some((block::Height(0), hash))
                if (hash == &genesis_hash(Network::Mainnet)
                    || hash == &genesis_hash(Network::Testnet)) => {}
            Some((block::Height(0), _)) => {
                Err("the genesis checkpoint does not match the Mainnet or Testnet genesis hash")?
            }
            Some(_) => Err("checkpoints must start at the genesis block height 0")?,
            None => Err("there must be at least one checkpoint, for the genesis block")?,
        };

        // This check rejects duplicate heights, whether they have the same or
        // different hashes
        if checkpoints.len() != original_len {
            Err("checkpoint heights must be unique")?;
        }

        let block_hashes: HashSet<&block::Hash> = checkpoints.values().collect();
        if block_hashes.len() != original_len {
            Err("checkpoint hashes must be unique")?;
        }

        // [0; 32] is the null hash, used as the parent hash of genesis
        // blocks, so it can never be a real block hash.
        if block_hashes.contains(&block::Hash([0; 32])) {
            Err("checkpoint list contains invalid checkpoint hash: found null hash")?;
        }

        let checkpoints = CheckpointList(checkpoints);
        if checkpoints.max_height() > block::Height::MAX {
            Err("checkpoint list contains a checkpoint above the maximum block height")?;
        }

        Ok(checkpoints)
    }

    /// Return true if there is a checkpoint at `height`.
    pub fn contains(&self, height: block::Height) -> bool {
        self.0.contains_key(&height)
    }

    /// Returns the hash corresponding to the checkpoint at `height`,
    /// or None if there is no checkpoint at that height.
    pub fn hash(&self, height: block::Height) -> Option<block::Hash> {
        self.0.get(&height).cloned()
    }

    /// Return the block height of the highest checkpoint in the list.
    ///
    /// If there is only a single checkpoint, then the maximum height will
    /// be zero. (The genesis block.)
    pub fn max_height(&self) -> block::Height {
        self.max_checkpoint().0
    }

    /// Return the highest checkpoint in the list: the hardened checkpoint.
    pub fn max_checkpoint(&self) -> (block::Height, block::Hash) {
        self.0
            .iter()
            .next_back()
            .map(|(height, hash)| (*height, *hash))
            .expect("checkpoint lists must have at least one checkpoint")
    }

    /// Iterate over the checkpoints, highest height first.
    ///
    /// The iterator is finite and restartable, and does not change the
    /// underlying list.
    pub fn iter_descending(&self) -> impl Iterator<Item = (block::Height, block::Hash)> + '_ {
        self.0.iter().rev().map(|(height, hash)| (*height, *hash))
    }
}
