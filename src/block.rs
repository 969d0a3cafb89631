//! Block heights, block header hashes, and the read-only view of the host
//! node's block index.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The height of a block in the chain.
///
/// Heights are counted from the genesis block, which is at height 0.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
pub struct Height(pub u32);

impl Height {
    /// The minimum block height, the genesis height.
    pub const MIN: Height = Height(0);

    /// The maximum block height.
    ///
    /// One below the transaction locktime threshold, so heights can never
    /// be confused with locktime timestamps.
    pub const MAX: Height = Height(499_999_999);
}

/// An error parsing a [`Height`] from a string.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("block height is not in the valid range")]
pub struct ParseHeightError;

impl FromStr for Height {
    type Err = ParseHeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u32>() {
            Ok(height) if height <= Height::MAX.0 => Ok(Height(height)),
            _ => Err(ParseHeightError),
        }
    }
}

/// A block header hash, stored in internal byte order.
///
/// `Display` and `FromStr` use the byte-reversed hex convention of
/// Bitcoin-family tools, so hashes round-trip against `getblockhash`
/// output and the embedded checkpoint files.
#[derive(Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("block::Hash").field(&self.to_string()).finish()
    }
}

/// An error parsing a [`Hash`] from a hex string.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseHashError {
    /// The string does not encode exactly 32 bytes.
    #[error("block hash hex strings must encode exactly 32 bytes")]
    BadLength,

    /// The string is not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl FromStr for Hash {
    type Err = ParseHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let mut inner: [u8; 32] = bytes.try_into().map_err(|_| ParseHashError::BadLength)?;
        inner.reverse();
        Ok(Hash(inner))
    }
}

/// A read-only summary of one entry in the host node's block index.
///
/// This crate never builds these from chain data; the host supplies them,
/// and holds its own index stable while a lookup borrows it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexEntry {
    /// The height of this block.
    pub height: Height,

    /// The header hash of this block.
    pub hash: Hash,

    /// The cumulative number of transactions in the chain, up to and
    /// including this block.
    pub chain_tx_count: u64,

    /// The time field from this block's header.
    pub time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_display_round_trips() {
        let hex = "00000c31cbfa287f2bc7c6c5634475883af72c6dd47cd3d27341bc668f731c81";
        let hash: Hash = hex.parse().expect("valid hash parses");
        assert_eq!(hash.to_string(), hex);
    }

    #[test]
    fn hash_parse_is_byte_reversed() {
        let hash: Hash = "0100000000000000000000000000000000000000000000000000000000000000"
            .parse()
            .expect("valid hash parses");
        let mut expected = [0; 32];
        expected[31] = 0x01;
        assert_eq!(hash, Hash(expected));
    }

    #[test]
    fn hash_parse_rejects_bad_input() {
        assert_eq!("00".parse::<Hash>(), Err(ParseHashError::BadLength));
        assert!("zz".repeat(32).parse::<Hash>().is_err());
    }

    #[test]
    fn height_parse_bounds() {
        assert_eq!("0".parse::<Height>(), Ok(Height(0)));
        assert_eq!("499999999".parse::<Height>(), Ok(Height::MAX));
        assert_eq!("500000000".parse::<Height>(), Err(ParseHeightError));
        assert_eq!("-1".parse::<Height>(), Err(ParseHeightError));
    }
}
