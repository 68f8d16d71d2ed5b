//! Property tests over arbitrary capacities, seeds and operation sequences.

use std::collections::BTreeSet;

use proptest::prelude::*;
use roulette::{DrawPool, PoolError, PoolState, SeededRandomProvider};

#[derive(Debug, Clone)]
enum Op {
    Draw,
    Reset,
    Configure(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => Just(Op::Draw),
        1 => Just(Op::Reset),
        1 => (1u32..40).prop_map(Op::Configure),
    ]
}

fn check_conservation(pool: &DrawPool) -> Result<(), TestCaseError> {
    let remaining = pool.remaining_ids();
    let drawn = pool.drawn_ids();
    prop_assert_eq!(remaining.len() + drawn.len(), pool.capacity() as usize);

    let drawn_set: BTreeSet<u32> = drawn.iter().copied().collect();
    prop_assert_eq!(drawn_set.len(), drawn.len(), "duplicate in history");
    prop_assert!(remaining.is_disjoint(&drawn_set));

    let all: BTreeSet<u32> = remaining.union(&drawn_set).copied().collect();
    prop_assert_eq!(all, (1..=pool.capacity()).collect::<BTreeSet<_>>());
    Ok(())
}

proptest! {
    #[test]
    fn draws_until_exhaustion_conserve_pool(capacity in 1u32..200, seed in any::<u64>()) {
        let random = SeededRandomProvider::new(seed);
        let mut pool = DrawPool::new(capacity).expect("valid capacity");

        for _ in 0..capacity {
            let remaining_before = pool.remaining_ids();
            let picked = pool.draw(&random).expect("pool not exhausted");
            prop_assert!(remaining_before.contains(&picked));
            check_conservation(&pool)?;
        }

        prop_assert_eq!(pool.state(), PoolState::Exhausted);
        let mut order = pool.drawn_ids();
        order.sort_unstable();
        prop_assert_eq!(order, (1..=capacity).collect::<Vec<_>>());
    }

    #[test]
    fn exhausted_draw_never_mutates(capacity in 1u32..30, seed in any::<u64>(), extra in 1usize..5) {
        let random = SeededRandomProvider::new(seed);
        let mut pool = DrawPool::new(capacity).expect("valid capacity");
        for _ in 0..capacity {
            pool.draw(&random).expect("pool not exhausted");
        }
        let history = pool.drawn_ids();

        for _ in 0..extra {
            prop_assert_eq!(pool.draw(&random), Err(PoolError::Empty { capacity }));
            prop_assert_eq!(pool.drawn_ids(), history.clone());
            prop_assert!(pool.remaining_ids().is_empty());
        }
    }

    #[test]
    fn any_operation_sequence_conserves(
        capacity in 1u32..40,
        seed in any::<u64>(),
        ops in proptest::collection::vec(op_strategy(), 0..120),
    ) {
        let random = SeededRandomProvider::new(seed);
        let mut pool = DrawPool::new(capacity).expect("valid capacity");

        for op in ops {
            match op {
                Op::Draw => {
                    let was_exhausted = pool.is_exhausted();
                    let result = pool.draw(&random);
                    prop_assert_eq!(result.is_err(), was_exhausted);
                }
                Op::Reset => {
                    pool.reset();
                    prop_assert_eq!(pool.drawn_count(), 0);
                }
                Op::Configure(n) => {
                    pool.configure(n).expect("valid capacity");
                    prop_assert_eq!(pool.capacity(), n);
                    prop_assert_eq!(pool.drawn_count(), 0);
                }
            }
            check_conservation(&pool)?;
        }
    }
}
