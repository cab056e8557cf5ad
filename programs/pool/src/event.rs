//! Events recorded by successful mutations
//!
//! The engine appends one event per committed state change; failed calls
//! record nothing. The execution environment drains them after each call.

use serde::{Deserialize, Serialize};
use stakepool_common::{Amount, ExternalPoolId, Identity, PoolId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolEvent {
    PoolCreated {
        pool_id: PoolId,
        reward_rate: Amount,
        external_pool_id: ExternalPoolId,
        ts: Timestamp,
    },
    Staked {
        pool_id: PoolId,
        participant: Identity,
        amount: Amount,
        ts: Timestamp,
    },
    Unstaked {
        pool_id: PoolId,
        participant: Identity,
        amount: Amount,
        ts: Timestamp,
    },
    RewardClaimed {
        pool_id: PoolId,
        participant: Identity,
        amount: Amount,
        ts: Timestamp,
    },
}

impl PoolEvent {
    pub fn pool_id(&self) -> PoolId {
        match self {
            PoolEvent::PoolCreated { pool_id, .. }
            | PoolEvent::Staked { pool_id, .. }
            | PoolEvent::Unstaked { pool_id, .. }
            | PoolEvent::RewardClaimed { pool_id, .. } => *pool_id,
        }
    }
}
