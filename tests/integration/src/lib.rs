//! Stakepool Integration Tests
//!
//! Shared fixtures: a fixed owner, synthetic participants and a manual clock,
//! so every scenario is deterministic.

pub use stakepool_common;
pub use stakepool_program;

use stakepool_common::{Amount, ExternalPoolId, Identity, PoolId, Timestamp};
use stakepool_program::StakingPool;

/// Deployment owner used by every fixture
pub const OWNER: Identity = Identity::new([0xA0; 32]);

/// Participant `n` (never equal to the owner)
pub fn participant(n: u8) -> Identity {
    let mut bytes = [0u8; 32];
    bytes[0] = 1;
    bytes[31] = n;
    Identity::new(bytes)
}

/// Manually advanced clock
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    now: Timestamp,
}

impl Clock {
    pub fn at(now: Timestamp) -> Self {
        Self { now }
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn advance(&mut self, secs: u64) -> Timestamp {
        self.now = self.now.saturating_add(secs);
        self.now
    }
}

/// Fresh engine owned by `OWNER`
pub fn engine() -> StakingPool {
    StakingPool::new(OWNER)
}

/// Engine with one pool at `reward_rate`, returning its id
pub fn engine_with_pool(reward_rate: Amount) -> (StakingPool, PoolId) {
    let mut engine = engine();
    let pool_id = engine
        .create_pool(OWNER, 0, reward_rate, ExternalPoolId(42))
        .expect("owner can create a pool");
    (engine, pool_id)
}
