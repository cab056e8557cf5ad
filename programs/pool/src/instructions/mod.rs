//! Instruction handlers
//!
//! Each handler validates, computes the complete new state on copies, and
//! only then writes it back. Nothing is committed before the last fallible
//! step, which keeps every call all-or-nothing.

pub mod create_pool;
pub mod stake;
pub mod unstake;
pub mod claim_reward;

pub use create_pool::*;
pub use stake::*;
pub use unstake::*;
pub use claim_reward::*;
