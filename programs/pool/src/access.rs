//! Owner-gated access control

use serde::{Deserialize, Serialize};
use stakepool_common::{Identity, StakeError};

/// The single privileged identity, fixed when the pool engine is deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    owner: Identity,
}

impl Ownership {
    pub fn new(owner: Identity) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Identity {
        self.owner
    }

    /// Precondition check only; never mutates anything
    pub fn require_owner(&self, caller: &Identity) -> Result<(), StakeError> {
        if caller != &self.owner {
            return Err(StakeError::Unauthorized);
        }
        Ok(())
    }
}
