//! Invariant checking helpers

use stakepool_common::PoolId;

use crate::engine::StakingPool;

/// Pool total equals the sum of its participants' stakes
///
/// False for an unknown pool or when the sum does not fit the working width.
pub fn pool_total_matches(engine: &StakingPool, pool_id: PoolId) -> bool {
    let Ok(pool) = engine.registry.get(pool_id) else {
        return false;
    };
    engine.ledger.pool_total(pool_id) == Ok(pool.total_staked)
}

/// Every pool's total is consistent with the ledger
pub fn total_staked_consistent(engine: &StakingPool) -> bool {
    engine
        .registry
        .iter()
        .all(|pool| pool_total_matches(engine, pool.id))
}

/// Pool ids are exactly 1..=pool_count
pub fn pool_ids_sequential(engine: &StakingPool) -> bool {
    let count = engine.registry.pool_count();
    let mut expected = 1u64;
    for pool in engine.registry.iter() {
        if pool.id != expected {
            return false;
        }
        expected = expected.saturating_add(1);
    }
    expected.saturating_sub(1) == count
}

/// No stake record references a pool that does not exist
pub fn stakes_reference_pools(engine: &StakingPool) -> bool {
    let count = engine.registry.pool_count();
    let referenced: usize = (1..=count)
        .map(|id| engine.ledger.pool_stakes(id).count())
        .sum();
    referenced == engine.ledger.len()
}

/// Balances unchanged between two engine states
pub fn balances_unchanged(before: &StakingPool, after: &StakingPool) -> bool {
    before.registry == after.registry && before.ledger == after.ledger
}
