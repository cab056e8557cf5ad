//! Reward pool record

use serde::{Deserialize, Serialize};
use stakepool_common::{Amount, ExternalPoolId, PoolId};

/// A reward-earning bucket participants stake into
///
/// `reward_rate` is fixed at creation. `total_staked` always equals the sum
/// of every participant's stake in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Sequential id, starting at 1
    pub id: PoolId,
    /// Reward per staked unit per second, in scaled units (> 0)
    pub reward_rate: Amount,
    /// Caller-supplied correlation key, stored verbatim
    pub external_pool_id: ExternalPoolId,
    /// Sum of all active stakes
    pub total_staked: Amount,
    /// Cumulative rewards paid out of this pool
    pub total_rewards_paid: Amount,
}

impl Pool {
    pub fn new(id: PoolId, reward_rate: Amount, external_pool_id: ExternalPoolId) -> Self {
        Self {
            id,
            reward_rate,
            external_pool_id,
            total_staked: 0,
            total_rewards_paid: 0,
        }
    }
}
