//! Pool registry - owns every pool and the sequential id counter

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stakepool_common::{add_u64, Amount, ExternalPoolId, PoolId, StakeError, NO_POOL};

use super::pool::Pool;

/// Pool table plus the monotonically increasing pool counter
///
/// Pools are never deleted, so `pool_count` is both the number of pools and
/// the id of the most recent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRegistry {
    pool_count: u64,
    pools: BTreeMap<PoolId, Pool>,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool_count(&self) -> u64 {
        self.pool_count
    }

    /// Id the next successful registration will receive
    pub fn next_pool_id(&self) -> Result<PoolId, StakeError> {
        add_u64(self.pool_count, 1)
    }

    /// Validate and store a new pool, returning its id
    ///
    /// Validation happens before the counter moves, so a rejected
    /// registration leaves the registry untouched.
    pub fn register(
        &mut self,
        reward_rate: Amount,
        external_pool_id: ExternalPoolId,
    ) -> Result<PoolId, StakeError> {
        if reward_rate == 0 {
            return Err(StakeError::InvalidParameter);
        }

        let pool_id = self.next_pool_id()?;
        self.pools.insert(pool_id, Pool::new(pool_id, reward_rate, external_pool_id));
        self.pool_count = pool_id;

        Ok(pool_id)
    }

    pub fn get(&self, pool_id: PoolId) -> Result<&Pool, StakeError> {
        if pool_id == NO_POOL {
            return Err(StakeError::NotFound);
        }
        self.pools.get(&pool_id).ok_or(StakeError::NotFound)
    }

    /// Mutable access restricted to the crate; entry points commit through it
    pub(crate) fn get_mut(&mut self, pool_id: PoolId) -> Result<&mut Pool, StakeError> {
        self.pools.get_mut(&pool_id).ok_or(StakeError::NotFound)
    }

    pub fn contains(&self, pool_id: PoolId) -> bool {
        self.pools.contains_key(&pool_id)
    }

    /// Pools in id order
    pub fn iter(&self) -> impl Iterator<Item = &Pool> {
        self.pools.values()
    }
}
