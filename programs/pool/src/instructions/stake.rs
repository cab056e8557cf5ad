//! Stake instruction - deposit into a pool

use log::{debug, warn};
use stakepool_common::{add_u128, Amount, Identity, PoolId, StakeError, Timestamp};

use crate::engine::StakingPool;
use crate::event::PoolEvent;
use crate::invariants::pool_total_matches;
use crate::reward::settle;
use crate::state::{Stake, StakeSnapshot};

/// Process stake instruction
///
/// Settles the caller's pending accrual at the old amount, then adds
/// `amount` to both the caller's stake and the pool total.
pub fn process_stake(
    engine: &mut StakingPool,
    caller: Identity,
    now: Timestamp,
    pool_id: PoolId,
    amount: Amount,
) -> Result<StakeSnapshot, StakeError> {
    let pool = match engine.registry.get(pool_id) {
        Ok(pool) => *pool,
        Err(e) => {
            warn!("stake rejected: pool {} not found", pool_id);
            return Err(e);
        }
    };

    if amount == 0 {
        warn!("stake rejected: amount must be greater than 0");
        return Err(StakeError::InvalidParameter);
    }

    let current = engine
        .ledger
        .get(pool_id, &caller)
        .copied()
        .unwrap_or_else(|| Stake::opened_at(now));

    let mut updated = settle(&current, pool.reward_rate, now, engine.config.clock_policy)
        .map_err(|e| {
            warn!(
                "stake rejected: settlement failed for {} in pool {}: {}",
                caller, pool_id, e
            );
            e
        })?;
    updated.amount = add_u128(updated.amount, amount).map_err(|e| {
        warn!("stake rejected: stake of {} in pool {}: {}", caller, pool_id, e);
        e
    })?;
    let total_staked = add_u128(pool.total_staked, amount).map_err(|e| {
        warn!("stake rejected: total staked in pool {}: {}", pool_id, e);
        e
    })?;

    // Commit
    engine.registry.get_mut(pool_id)?.total_staked = total_staked;
    engine.ledger.put(pool_id, caller, updated);
    engine.record(PoolEvent::Staked {
        pool_id,
        participant: caller,
        amount,
        ts: now,
    });

    debug_assert!(pool_total_matches(engine, pool_id));
    debug!("{} staked {} into pool {} (now {})", caller, amount, pool_id, updated.amount);
    Ok(updated.snapshot(pool_id, caller))
}
