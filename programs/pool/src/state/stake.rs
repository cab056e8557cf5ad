//! Per-participant stake record

use serde::{Deserialize, Serialize};
use stakepool_common::{Amount, Identity, PoolId, Timestamp};

/// Stake of one participant in one pool
///
/// Accrual must be settled (folded into `accrued_reward`, checkpoint
/// advanced) before `amount` changes. Records are never removed; a fully
/// withdrawn stake stays as a zero-amount record with its claim history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stake {
    /// Currently staked amount
    pub amount: Amount,
    /// Last settlement checkpoint
    pub last_accrual_time: Timestamp,
    /// Pending reward, in scaled units
    pub accrued_reward: Amount,
    /// Lifetime rewards paid to this participant from this pool
    pub total_claimed: Amount,
}

impl Stake {
    /// Empty record checkpointed at `now`
    pub fn opened_at(now: Timestamp) -> Self {
        Self {
            amount: 0,
            last_accrual_time: now,
            accrued_reward: 0,
            total_claimed: 0,
        }
    }

    pub fn snapshot(&self, pool_id: PoolId, participant: Identity) -> StakeSnapshot {
        StakeSnapshot {
            pool_id,
            participant,
            amount: self.amount,
            accrued_reward: self.accrued_reward,
            last_accrual_time: self.last_accrual_time,
            total_claimed: self.total_claimed,
        }
    }
}

/// Read-only view of a stake returned to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeSnapshot {
    pub pool_id: PoolId,
    pub participant: Identity,
    pub amount: Amount,
    pub accrued_reward: Amount,
    pub last_accrual_time: Timestamp,
    pub total_claimed: Amount,
}
