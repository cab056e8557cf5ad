//! Reward engine - settlement and payout
//!
//! Settlement folds reward earned since the last checkpoint into the
//! participant's pending balance:
//!
//!   accrued += (now - last_accrual_time) * amount * reward_rate
//!
//! Key properties:
//! - Settlement uses the amount staked *before* the call changes it
//! - Accrual is exact (no division), so settling over [t0,t1] then [t1,t2]
//!   equals settling once over [t0,t2]
//! - Any overflow fails the whole call; a truncated reward is never stored
//! - Payout divides by the configured scale and carries the remainder

use stakepool_common::{
    add_u128, div_rem_u128, mul3_u128, sub_u64, Amount, StakeError, Timestamp,
};

use crate::config::{ClockPolicy, EngineConfig};
use crate::state::Stake;

/// Seconds elapsed since the checkpoint, per the clock policy
///
/// Returns `None` when the clock is behind the checkpoint and the policy
/// clamps; the checkpoint must then stay where it is.
pub fn elapsed_since(
    last_accrual_time: Timestamp,
    now: Timestamp,
    policy: ClockPolicy,
) -> Result<Option<u64>, StakeError> {
    if now >= last_accrual_time {
        return Ok(Some(sub_u64(now, last_accrual_time)?));
    }
    match policy {
        ClockPolicy::Reject => Err(StakeError::InvalidState),
        ClockPolicy::Clamp => Ok(None),
    }
}

/// Reward earned by `amount` at `reward_rate` over `elapsed` seconds
pub fn accrued_over(
    amount: Amount,
    reward_rate: Amount,
    elapsed: u64,
) -> Result<Amount, StakeError> {
    mul3_u128(Amount::from(elapsed), amount, reward_rate)
}

/// Settle pending accrual, returning the updated record
///
/// Pure: the caller decides whether to commit the result.
pub fn settle(
    stake: &Stake,
    reward_rate: Amount,
    now: Timestamp,
    policy: ClockPolicy,
) -> Result<Stake, StakeError> {
    let Some(elapsed) = elapsed_since(stake.last_accrual_time, now, policy)? else {
        return Ok(*stake);
    };

    let newly_accrued = accrued_over(stake.amount, reward_rate, elapsed)?;

    let mut settled = *stake;
    settled.accrued_reward = add_u128(stake.accrued_reward, newly_accrued)?;
    settled.last_accrual_time = now;
    Ok(settled)
}

/// Split scaled accrual into (payout, carried remainder)
pub fn split_payout(accrued: Amount, scale: Amount) -> Result<(Amount, Amount), StakeError> {
    div_rem_u128(accrued, scale)
}

/// Payout a claim at `now` would make, without touching state
pub fn preview_payout(
    stake: &Stake,
    reward_rate: Amount,
    now: Timestamp,
    config: &EngineConfig,
) -> Result<Amount, StakeError> {
    let settled = settle(stake, reward_rate, now, config.clock_policy)?;
    let (paid, _) = split_payout(settled.accrued_reward, config.scale())?;
    Ok(paid)
}
