//! Stake ledger - (pool, participant) -> stake record

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stakepool_common::{add_u128, Amount, Identity, PoolId, StakeError};

use super::stake::Stake;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeLedger {
    #[serde(with = "entries")]
    stakes: BTreeMap<(PoolId, Identity), Stake>,
}

impl StakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pool_id: PoolId, participant: &Identity) -> Option<&Stake> {
        self.stakes.get(&(pool_id, *participant))
    }

    /// Replace (or create) a record. Callers compute the new record in full
    /// before writing it, so a failed call never reaches this point.
    pub(crate) fn put(&mut self, pool_id: PoolId, participant: Identity, stake: Stake) {
        self.stakes.insert((pool_id, participant), stake);
    }

    /// Records of one pool, ordered by participant
    pub fn pool_stakes(&self, pool_id: PoolId) -> impl Iterator<Item = (&Identity, &Stake)> {
        self.stakes
            .range((pool_id, Identity::MIN)..=(pool_id, Identity::MAX))
            .map(|((_, who), stake)| (who, stake))
    }

    /// Sum of staked amounts in a pool
    pub fn pool_total(&self, pool_id: PoolId) -> Result<Amount, StakeError> {
        self.pool_stakes(pool_id)
            .try_fold(0u128, |acc, (_, stake)| add_u128(acc, stake.amount))
    }

    pub fn len(&self) -> usize {
        self.stakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stakes.is_empty()
    }
}

/// Tuple keys are not valid JSON object keys; store the map as a list
mod entries {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use stakepool_common::{Identity, PoolId};

    use crate::state::stake::Stake;

    #[derive(Serialize, Deserialize)]
    struct Entry {
        pool_id: PoolId,
        participant: Identity,
        stake: Stake,
    }

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<(PoolId, Identity), Stake>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let list: Vec<Entry> = map
            .iter()
            .map(|(&(pool_id, participant), &stake)| Entry { pool_id, participant, stake })
            .collect();
        list.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<(PoolId, Identity), Stake>, D::Error> {
        let list = Vec::<Entry>::deserialize(deserializer)?;
        Ok(list
            .into_iter()
            .map(|e| ((e.pool_id, e.participant), e.stake))
            .collect())
    }
}
