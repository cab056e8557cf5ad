//! End-of-replay state summary

use serde::Serialize;
use stakepool_common::{Identity, StakeError};
use stakepool_program::{invariants, Outcome, Pool, StakingPool};

/// Counters gathered while replaying
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplayStats {
    pub applied: u64,
    pub rejected: u64,
    pub events: u64,
}

impl ReplayStats {
    pub fn record(&mut self, outcome: &Result<Outcome, StakeError>) {
        match outcome {
            Ok(_) => self.applied = self.applied.saturating_add(1),
            Err(_) => self.rejected = self.rejected.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub owner: Identity,
    pub pool_count: u64,
    pub pools: Vec<Pool>,
    pub stake_records: usize,
    pub stats: ReplayStats,
    /// Every pool total matches its ledger
    pub consistent: bool,
}

impl Summary {
    pub fn from_engine(engine: &StakingPool, stats: ReplayStats) -> Self {
        Self {
            owner: engine.owner(),
            pool_count: engine.pool_count(),
            pools: engine.pools().copied().collect(),
            stake_records: engine.ledger().len(),
            stats,
            consistent: invariants::total_staked_consistent(engine),
        }
    }
}
