//! Unstake instruction - withdraw from a pool

use log::{debug, warn};
use stakepool_common::{sub_u128, Amount, Identity, PoolId, StakeError, Timestamp};

use crate::engine::StakingPool;
use crate::event::PoolEvent;
use crate::invariants::pool_total_matches;
use crate::reward::settle;
use crate::state::{Stake, StakeSnapshot};

/// Process unstake instruction
///
/// Settles pending accrual at the old amount, then subtracts `amount` from
/// the caller's stake and the pool total. A participant without a record
/// can only withdraw zero, which is answered without creating one.
pub fn process_unstake(
    engine: &mut StakingPool,
    caller: Identity,
    now: Timestamp,
    pool_id: PoolId,
    amount: Amount,
) -> Result<StakeSnapshot, StakeError> {
    let pool = match engine.registry.get(pool_id) {
        Ok(pool) => *pool,
        Err(e) => {
            warn!("unstake rejected: pool {} not found", pool_id);
            return Err(e);
        }
    };

    let Some(current) = engine.ledger.get(pool_id, &caller).copied() else {
        if amount == 0 {
            return Ok(Stake::opened_at(now).snapshot(pool_id, caller));
        }
        warn!("unstake rejected: {} has no stake in pool {}", caller, pool_id);
        return Err(StakeError::InsufficientStake);
    };

    if amount > current.amount {
        warn!(
            "unstake rejected: {} requested {} but holds {} in pool {}",
            caller, amount, current.amount, pool_id
        );
        return Err(StakeError::InsufficientStake);
    }

    let mut updated = settle(&current, pool.reward_rate, now, engine.config.clock_policy)
        .map_err(|e| {
            warn!(
                "unstake rejected: settlement failed for {} in pool {}: {}",
                caller, pool_id, e
            );
            e
        })?;
    updated.amount = sub_u128(updated.amount, amount).map_err(|e| {
        warn!("unstake rejected: stake of {} in pool {}: {}", caller, pool_id, e);
        e
    })?;
    let total_staked = sub_u128(pool.total_staked, amount).map_err(|e| {
        warn!("unstake rejected: total staked in pool {}: {}", pool_id, e);
        e
    })?;

    // Commit
    engine.registry.get_mut(pool_id)?.total_staked = total_staked;
    engine.ledger.put(pool_id, caller, updated);
    engine.record(PoolEvent::Unstaked {
        pool_id,
        participant: caller,
        amount,
        ts: now,
    });

    debug_assert!(pool_total_matches(engine, pool_id));
    debug!("{} unstaked {} from pool {} (now {})", caller, amount, pool_id, updated.amount);
    Ok(updated.snapshot(pool_id, caller))
}
