//! Staking pool engine - owns all registry and ledger state
//!
//! One `StakingPool` is one deployment: a fixed owner, a pool registry and a
//! stake ledger. Mutating entry points take the caller identity and the
//! environment's timestamp explicitly and either commit fully or fail with
//! state untouched.

use serde::{Deserialize, Serialize};
use stakepool_common::{Amount, ExternalPoolId, Identity, PoolId, StakeError, Timestamp};

use crate::access::Ownership;
use crate::config::EngineConfig;
use crate::event::PoolEvent;
use crate::instructions::{
    process_claim_reward, process_create_pool, process_stake, process_unstake,
};
use crate::reward;
use crate::state::{Pool, PoolRegistry, StakeLedger, StakeSnapshot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingPool {
    pub(crate) access: Ownership,
    pub(crate) config: EngineConfig,
    pub(crate) registry: PoolRegistry,
    pub(crate) ledger: StakeLedger,
    /// Undrained events; grows until `drain_events` is called
    #[serde(skip)]
    pub(crate) events: Vec<PoolEvent>,
}

impl StakingPool {
    /// Deploy with the default configuration
    pub fn new(owner: Identity) -> Self {
        Self {
            access: Ownership::new(owner),
            config: EngineConfig::default(),
            registry: PoolRegistry::new(),
            ledger: StakeLedger::new(),
            events: Vec::new(),
        }
    }

    /// Deploy with an explicit configuration
    pub fn with_config(owner: Identity, config: EngineConfig) -> Result<Self, StakeError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(owner)
        })
    }

    pub fn owner(&self) -> Identity {
        self.access.owner()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------

    /// Owner-only: register a pool and return its id
    pub fn create_pool(
        &mut self,
        caller: Identity,
        now: Timestamp,
        reward_rate: Amount,
        external_pool_id: ExternalPoolId,
    ) -> Result<PoolId, StakeError> {
        process_create_pool(self, caller, now, reward_rate, external_pool_id)
    }

    pub fn get_pool(&self, pool_id: PoolId) -> Result<Pool, StakeError> {
        self.registry.get(pool_id).copied()
    }

    pub fn pool_count(&self) -> u64 {
        self.registry.pool_count()
    }

    /// Deposit `amount` into `pool_id` for `caller`
    pub fn stake(
        &mut self,
        caller: Identity,
        now: Timestamp,
        pool_id: PoolId,
        amount: Amount,
    ) -> Result<StakeSnapshot, StakeError> {
        process_stake(self, caller, now, pool_id, amount)
    }

    /// Withdraw `amount` from `pool_id` for `caller`
    pub fn unstake(
        &mut self,
        caller: Identity,
        now: Timestamp,
        pool_id: PoolId,
        amount: Amount,
    ) -> Result<StakeSnapshot, StakeError> {
        process_unstake(self, caller, now, pool_id, amount)
    }

    /// Pay out everything accrued for `caller` in `pool_id`
    pub fn claim_reward(
        &mut self,
        caller: Identity,
        now: Timestamp,
        pool_id: PoolId,
    ) -> Result<Amount, StakeError> {
        process_claim_reward(self, caller, now, pool_id)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Stake record of a participant, if they ever staked into the pool
    pub fn get_stake(
        &self,
        pool_id: PoolId,
        participant: &Identity,
    ) -> Result<Option<StakeSnapshot>, StakeError> {
        self.registry.get(pool_id)?;
        Ok(self
            .ledger
            .get(pool_id, participant)
            .map(|stake| stake.snapshot(pool_id, *participant)))
    }

    /// What a claim at `now` would pay, without settling anything
    pub fn pending_reward(
        &self,
        pool_id: PoolId,
        participant: &Identity,
        now: Timestamp,
    ) -> Result<Amount, StakeError> {
        let pool = self.registry.get(pool_id)?;
        match self.ledger.get(pool_id, participant) {
            Some(stake) => reward::preview_payout(stake, pool.reward_rate, now, &self.config),
            None => Ok(0),
        }
    }

    /// Pools in id order
    pub fn pools(&self) -> impl Iterator<Item = &Pool> {
        self.registry.iter()
    }

    pub fn ledger(&self) -> &StakeLedger {
        &self.ledger
    }

    /// Take the events recorded since the last drain
    ///
    /// Events accumulate until drained; a long-lived caller must drain after
    /// each call (or periodically) to keep the buffer bounded.
    pub fn drain_events(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn record(&mut self, event: PoolEvent) {
        self.events.push(event);
    }
}
