pub mod pool;
pub mod registry;
pub mod stake;
pub mod ledger;

pub use pool::*;
pub use registry::*;
pub use stake::*;
pub use ledger::*;
