//! Pool registry scenarios and properties

use proptest::prelude::*;
use stakepool_common::{ExternalPoolId, Instruction, StakeError};
use stakepool_integration_tests::{engine, participant, OWNER};
use stakepool_program::Outcome;

/// Owner creates pool 1 with rate 10 and pool 2 with rate 20
#[test]
fn test_owner_creates_two_pools() {
    let mut engine = engine();

    assert_eq!(engine.create_pool(OWNER, 0, 10, ExternalPoolId(42)), Ok(1));
    let pool = engine.get_pool(1).unwrap();
    assert_eq!(pool.reward_rate, 10);
    assert_eq!(pool.total_staked, 0);
    assert_eq!(pool.total_rewards_paid, 0);
    assert_eq!(engine.pool_count(), 1);

    assert_eq!(engine.create_pool(OWNER, 0, 20, ExternalPoolId(43)), Ok(2));
    assert_eq!(engine.get_pool(2).unwrap().reward_rate, 20);
    assert_eq!(engine.get_pool(1).unwrap().reward_rate, 10);
    assert_eq!(engine.pool_count(), 2);
}

/// Zero rate fails and the counter does not move
#[test]
fn test_zero_rate_rejected() {
    let mut engine = engine();
    engine.create_pool(OWNER, 0, 10, ExternalPoolId(42)).unwrap();

    assert_eq!(
        engine.create_pool(OWNER, 0, 0, ExternalPoolId(42)),
        Err(StakeError::InvalidParameter)
    );
    assert_eq!(engine.pool_count(), 1);
}

/// Negative rate fails with the same kind as zero, at decoding
#[test]
fn test_negative_rate_rejected() {
    let mut engine = engine();
    let ix = Instruction::CreatePool {
        reward_rate: -1,
        external_pool_id: ExternalPoolId(42),
    };

    assert_eq!(engine.process(OWNER, 0, &ix), Err(StakeError::InvalidParameter));
    assert_eq!(engine.pool_count(), 0);
}

#[test]
fn test_non_owner_cannot_create() {
    let mut engine = engine();
    assert_eq!(
        engine.create_pool(participant(1), 0, 10, ExternalPoolId(42)),
        Err(StakeError::Unauthorized)
    );
    assert_eq!(engine.pool_count(), 0);
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_pool_zero_never_assigned() {
    let mut engine = engine();
    engine.create_pool(OWNER, 0, 1, ExternalPoolId(0)).unwrap();
    assert_eq!(engine.get_pool(0), Err(StakeError::NotFound));
    assert_eq!(
        engine.process(OWNER, 0, &Instruction::GetPool { pool_id: 0 }),
        Err(StakeError::NotFound)
    );
}

#[test]
fn test_pool_count_instruction() {
    let mut engine = engine();
    engine.create_pool(OWNER, 0, 3, ExternalPoolId(9)).unwrap();
    assert_eq!(
        engine.process(participant(4), 0, &Instruction::PoolCount),
        Ok(Outcome::PoolCount(1))
    );
}

proptest! {
    /// Any positive rate is accepted and stored verbatim
    #[test]
    fn prop_positive_rate_stored(rate in 1u128..=u128::MAX, ext in any::<u64>()) {
        let mut engine = engine();
        let id = engine.create_pool(OWNER, 0, rate, ExternalPoolId(ext)).unwrap();
        let pool = engine.get_pool(id).unwrap();

        prop_assert_eq!(pool.reward_rate, rate);
        prop_assert_eq!(pool.external_pool_id, ExternalPoolId(ext));
        prop_assert_eq!(pool.total_staked, 0);
        prop_assert_eq!(pool.total_rewards_paid, 0);
    }

    /// Any non-positive rate is rejected and leaves the count alone
    #[test]
    fn prop_non_positive_rate_rejected(rate in i128::MIN..=0i128, preexisting in 0usize..4) {
        let mut engine = engine();
        for _ in 0..preexisting {
            engine.create_pool(OWNER, 0, 5, ExternalPoolId(1)).unwrap();
        }
        let ix = Instruction::CreatePool {
            reward_rate: rate,
            external_pool_id: ExternalPoolId(42),
        };

        prop_assert_eq!(engine.process(OWNER, 0, &ix), Err(StakeError::InvalidParameter));
        prop_assert_eq!(engine.pool_count(), preexisting as u64);
    }

    /// Ids are 1, 2, 3, ... and the count moves only on success
    #[test]
    fn prop_ids_sequential(rates in proptest::collection::vec(0u128..50, 1..40)) {
        let mut engine = engine();
        let mut expected = 0u64;

        for rate in &rates {
            let before = engine.pool_count();
            match engine.create_pool(OWNER, 0, *rate, ExternalPoolId(7)) {
                Ok(id) => {
                    expected += 1;
                    prop_assert_eq!(id, expected);
                    prop_assert_eq!(engine.pool_count(), before + 1);
                }
                Err(e) => {
                    prop_assert_eq!(e, StakeError::InvalidParameter);
                    prop_assert_eq!(engine.pool_count(), before);
                }
            }
        }

        // Each pool kept its own rate
        let stored: Vec<u128> = engine.pools().map(|p| p.reward_rate).collect();
        let accepted: Vec<u128> = rates.iter().copied().filter(|r| *r > 0).collect();
        prop_assert_eq!(stored, accepted);
        prop_assert!(stakepool_program::invariants::pool_ids_sequential(&engine));
    }
}
