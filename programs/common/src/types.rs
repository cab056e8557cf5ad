//! Core identifiers and quantities

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StakeError;

/// Ledger quantity (stakes, rewards, reward rates)
pub type Amount = u128;

/// Seconds supplied by the execution environment's clock
pub type Timestamp = u64;

/// Pool identifier, assigned sequentially from 1
pub type PoolId = u64;

/// Pool id that is never assigned
pub const NO_POOL: PoolId = 0;

/// Caller identity, authenticated by the surrounding environment
///
/// Rendered and parsed as base58, like an account address.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity(pub [u8; 32]);

impl Identity {
    /// Lowest identity in sort order (range scans)
    pub const MIN: Identity = Identity([0u8; 32]);
    /// Highest identity in sort order (range scans)
    pub const MAX: Identity = Identity([u8::MAX; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self)
    }
}

impl FromStr for Identity {
    type Err = StakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s)
            .into_vec()
            .map_err(|_| StakeError::InvalidParameter)?;
        let bytes: [u8; 32] = decoded
            .try_into()
            .map_err(|_| StakeError::InvalidParameter)?;
        Ok(Identity(bytes))
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Opaque correlation key for a pool in an outside system
///
/// Stored verbatim; never interpreted, never checked for uniqueness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalPoolId(pub u64);

impl From<u64> for ExternalPoolId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
