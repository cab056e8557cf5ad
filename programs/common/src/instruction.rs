//! Instruction set accepted by the staking pool
//!
//! The execution environment maps its own request encoding onto these
//! variants; caller identity and timestamp travel alongside, never inside.

use serde::{Deserialize, Serialize};

use crate::error::StakeError;
use crate::math::decode_reward_rate;
use crate::types::{Amount, ExternalPoolId, PoolId};

/// Largest reward rate an encoded `CreatePool` can carry
///
/// The wire field is signed so negative input can be told apart from a
/// valid rate; rates above `i128::MAX` are reachable only through the typed
/// `StakingPool::create_pool` call.
pub const MAX_ENCODED_REWARD_RATE: Amount = i128::MAX as Amount;

/// Instruction discriminator
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    CreatePool = 0,
    GetPool = 1,
    PoolCount = 2,
    Stake = 3,
    Unstake = 4,
    ClaimReward = 5,
}

/// A single call against the staking pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    /// Owner-only. `reward_rate` arrives signed so negative input is
    /// rejected while decoding rather than wrapping; the encodable ceiling
    /// is `MAX_ENCODED_REWARD_RATE`.
    CreatePool {
        reward_rate: i128,
        external_pool_id: ExternalPoolId,
    },
    GetPool {
        pool_id: PoolId,
    },
    PoolCount,
    Stake {
        pool_id: PoolId,
        amount: Amount,
    },
    Unstake {
        pool_id: PoolId,
        amount: Amount,
    },
    ClaimReward {
        pool_id: PoolId,
    },
}

impl Instruction {
    pub fn kind(&self) -> InstructionKind {
        match self {
            Instruction::CreatePool { .. } => InstructionKind::CreatePool,
            Instruction::GetPool { .. } => InstructionKind::GetPool,
            Instruction::PoolCount => InstructionKind::PoolCount,
            Instruction::Stake { .. } => InstructionKind::Stake,
            Instruction::Unstake { .. } => InstructionKind::Unstake,
            Instruction::ClaimReward { .. } => InstructionKind::ClaimReward,
        }
    }

    /// Decoded reward rate for `CreatePool`
    pub fn reward_rate(&self) -> Result<Amount, StakeError> {
        match self {
            Instruction::CreatePool { reward_rate, .. } => decode_reward_rate(*reward_rate),
            _ => Err(StakeError::InvalidInstruction),
        }
    }
}
