//! Create pool instruction - owner registers a new reward pool

use log::{debug, warn};
use stakepool_common::{Amount, ExternalPoolId, Identity, PoolId, StakeError, Timestamp};

use crate::engine::StakingPool;
use crate::event::PoolEvent;

/// Process create pool instruction
///
/// The owner check runs before any parameter validation.
///
/// # Arguments
/// * `engine` - Pool engine
/// * `caller` - Authenticated caller; must be the owner
/// * `now` - Environment timestamp (event only)
/// * `reward_rate` - Strictly positive reward rate
/// * `external_pool_id` - Opaque correlation key, stored verbatim
pub fn process_create_pool(
    engine: &mut StakingPool,
    caller: Identity,
    now: Timestamp,
    reward_rate: Amount,
    external_pool_id: ExternalPoolId,
) -> Result<PoolId, StakeError> {
    if let Err(e) = engine.access.require_owner(&caller) {
        warn!("create_pool rejected: caller {} is not the owner", caller);
        return Err(e);
    }

    if reward_rate == 0 {
        warn!("create_pool rejected: reward rate must be greater than 0");
        return Err(StakeError::InvalidParameter);
    }

    let pool_id = engine
        .registry
        .register(reward_rate, external_pool_id)
        .map_err(|e| {
            warn!("create_pool rejected: pool id space exhausted: {}", e);
            e
        })?;

    engine.record(PoolEvent::PoolCreated {
        pool_id,
        reward_rate,
        external_pool_id,
        ts: now,
    });

    debug!(
        "pool {} created (rate {}, external id {})",
        pool_id, reward_rate, external_pool_id.0
    );
    Ok(pool_id)
}
