//! Claim reward instruction - pay out accrued reward

use log::{debug, warn};
use stakepool_common::{add_u128, Amount, Identity, PoolId, StakeError, Timestamp};

use crate::engine::StakingPool;
use crate::event::PoolEvent;
use crate::reward::{settle, split_payout};

/// Process claim reward instruction
///
/// Settles pending accrual, pays `accrued / reward_scale`, keeps the
/// remainder accrued and adds the payout to the pool's `total_rewards_paid`.
/// When nothing is payable and nothing new accrued, returns zero and leaves
/// every record as it was.
pub fn process_claim_reward(
    engine: &mut StakingPool,
    caller: Identity,
    now: Timestamp,
    pool_id: PoolId,
) -> Result<Amount, StakeError> {
    let pool = match engine.registry.get(pool_id) {
        Ok(pool) => *pool,
        Err(e) => {
            warn!("claim_reward rejected: pool {} not found", pool_id);
            return Err(e);
        }
    };

    let Some(current) = engine.ledger.get(pool_id, &caller).copied() else {
        return Ok(0);
    };

    let mut updated = settle(&current, pool.reward_rate, now, engine.config.clock_policy)
        .map_err(|e| {
            warn!(
                "claim_reward rejected: settlement failed for {} in pool {}: {}",
                caller, pool_id, e
            );
            e
        })?;

    let (paid, carried) = split_payout(updated.accrued_reward, engine.config.scale())
        .map_err(|e| {
            warn!("claim_reward rejected: payout split in pool {}: {}", pool_id, e);
            e
        })?;

    if paid == 0 {
        if updated.accrued_reward != current.accrued_reward {
            // Only dust accrued; keep it settled
            engine.ledger.put(pool_id, caller, updated);
        }
        return Ok(0);
    }

    updated.accrued_reward = carried;
    updated.total_claimed = add_u128(updated.total_claimed, paid).map_err(|e| {
        warn!("claim_reward rejected: claim history of {} in pool {}: {}", caller, pool_id, e);
        e
    })?;
    let total_rewards_paid = add_u128(pool.total_rewards_paid, paid).map_err(|e| {
        warn!("claim_reward rejected: rewards paid by pool {}: {}", pool_id, e);
        e
    })?;

    // Commit
    engine.registry.get_mut(pool_id)?.total_rewards_paid = total_rewards_paid;
    engine.ledger.put(pool_id, caller, updated);
    engine.record(PoolEvent::RewardClaimed {
        pool_id,
        participant: caller,
        amount: paid,
        ts: now,
    });

    debug!("{} claimed {} from pool {}", caller, paid, pool_id);
    Ok(paid)
}
