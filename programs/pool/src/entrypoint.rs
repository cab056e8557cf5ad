//! Staking pool entrypoint - decoded instruction dispatch

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use stakepool_common::{Amount, Identity, Instruction, PoolId, StakeError, Timestamp};

use crate::engine::StakingPool;
use crate::state::{Pool, StakeSnapshot};

/// Successful result of one instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PoolCreated(PoolId),
    Pool(Pool),
    PoolCount(u64),
    Stake(StakeSnapshot),
    RewardPaid(Amount),
}

/// Dispatch one instruction for `caller` at `now`
pub fn process_instruction(
    engine: &mut StakingPool,
    caller: Identity,
    now: Timestamp,
    instruction: &Instruction,
) -> Result<Outcome, StakeError> {
    debug!("Instruction: {:?} from {} at {}", instruction.kind(), caller, now);

    match instruction {
        Instruction::CreatePool { external_pool_id, .. } => {
            // Owner check first, then decode the signed rate
            engine.access.require_owner(&caller).map_err(|e| {
                warn!("create_pool rejected: caller {} is not the owner", caller);
                e
            })?;
            let reward_rate = instruction.reward_rate().map_err(|e| {
                warn!("create_pool rejected: reward rate must be greater than 0");
                e
            })?;
            engine
                .create_pool(caller, now, reward_rate, *external_pool_id)
                .map(Outcome::PoolCreated)
        }
        Instruction::GetPool { pool_id } => engine.get_pool(*pool_id).map(Outcome::Pool),
        Instruction::PoolCount => Ok(Outcome::PoolCount(engine.pool_count())),
        Instruction::Stake { pool_id, amount } => engine
            .stake(caller, now, *pool_id, *amount)
            .map(Outcome::Stake),
        Instruction::Unstake { pool_id, amount } => engine
            .unstake(caller, now, *pool_id, *amount)
            .map(Outcome::Stake),
        Instruction::ClaimReward { pool_id } => engine
            .claim_reward(caller, now, *pool_id)
            .map(Outcome::RewardPaid),
    }
}

impl StakingPool {
    /// Dispatch one decoded instruction
    pub fn process(
        &mut self,
        caller: Identity,
        now: Timestamp,
        instruction: &Instruction,
    ) -> Result<Outcome, StakeError> {
        process_instruction(self, caller, now, instruction)
    }
}
