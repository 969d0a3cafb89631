//! Consensus parameters for each network.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::block;

/// The chain a node is following.
///
/// Threaded explicitly through every checkpoint operation, so callers pick
/// the active network at call time rather than through process-global state.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Network {
    /// The production network.
    Mainnet,
    /// The test network, where checkpoints are not enforced.
    Testnet,
}

impl Default for Network {
    fn default() -> Self {
        Network::Mainnet
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
        })
    }
}

/// Returns the hash for the genesis block in `network`.
pub fn genesis_hash(network: Network) -> block::Hash {
    match network {
        // cli getblockhash 0
        Network::Mainnet => "00000c31cbfa287f2bc7c6c5634475883af72c6dd47cd3d27341bc668f731c81",
        // cli -testnet getblockhash 0
        Network::Testnet => "332865499df77f269f1fa1c640075275abc3b452c21619bfe05f757a65a46c48",
    }
    .parse()
    .expect("hard-coded hash parses")
}
