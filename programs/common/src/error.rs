//! Error taxonomy shared by every entry point

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure kinds reported to the caller
///
/// Every failure aborts the whole call; no state is changed.
#[repr(u32)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StakeError {
    /// Caller lacks the required privilege
    #[error("caller is not authorized for this operation")]
    Unauthorized = 0,
    /// Caller-supplied value violates a precondition
    #[error("invalid parameter")]
    InvalidParameter = 1,
    /// Referenced pool does not exist
    #[error("pool not found")]
    NotFound = 2,
    /// Withdrawal exceeds the caller's staked amount
    #[error("insufficient stake")]
    InsufficientStake = 3,
    /// Arithmetic result exceeds the working width
    #[error("arithmetic overflow")]
    Overflow = 4,
    /// Arithmetic result would be negative
    #[error("arithmetic underflow")]
    Underflow = 5,
    /// Environment contract violated (e.g. clock moved backwards)
    #[error("invalid state")]
    InvalidState = 6,
    /// Instruction could not be decoded
    #[error("invalid instruction")]
    InvalidInstruction = 7,
}

impl StakeError {
    /// Stable numeric code for collaborators that encode errors as integers
    pub fn code(self) -> u32 {
        self as u32
    }
}
