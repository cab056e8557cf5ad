//! Engine configuration

use serde::{Deserialize, Serialize};
use stakepool_common::{Amount, StakeError};

/// How settlement treats a timestamp earlier than the last checkpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockPolicy {
    /// Fail the call with `InvalidState`
    #[default]
    Reject,
    /// Treat elapsed time as zero and keep the checkpoint where it is
    Clamp,
}

/// Tunables for reward settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed-point divisor applied at payout (1 = rewards in raw units)
    ///
    /// Accrual is kept in scaled units; the remainder of a payout stays
    /// accrued for the next claim.
    pub reward_scale: u64,

    /// Backward clock handling
    pub clock_policy: ClockPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reward_scale: 1,
            clock_policy: ClockPolicy::Reject,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), StakeError> {
        if self.reward_scale == 0 {
            return Err(StakeError::InvalidParameter);
        }
        Ok(())
    }

    pub fn scale(&self) -> Amount {
        Amount::from(self.reward_scale)
    }
}
