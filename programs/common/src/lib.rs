//! Shared vocabulary for the staking pool programs
//!
//! Identities, ids and timestamps, the error taxonomy, the numeric guard and
//! the instruction set the execution environment submits.

pub mod types;
pub mod math;
pub mod error;
pub mod instruction;

pub use types::*;
pub use math::*;
pub use error::*;
pub use instruction::*;
