//! Staking pool accounting core
//!
//! Pools with a fixed reward rate, a per-participant stake ledger and
//! overflow-checked reward settlement. Calls arrive already authenticated,
//! with an explicit caller identity and timestamp, and are expected to be
//! serialized by the execution environment.

pub mod access;
pub mod config;
pub mod event;
pub mod reward;
pub mod state;
pub mod instructions;
pub mod engine;
pub mod invariants;
pub mod entrypoint;

pub use access::*;
pub use config::*;
pub use event::*;
pub use state::*;
pub use engine::*;
pub use entrypoint::*;
