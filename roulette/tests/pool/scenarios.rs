//! Worked examples of pool behavior.

use std::collections::BTreeSet;

use roulette::{ConfigError, DrawPool, PoolError, SeededRandomProvider, ThreadRandomProvider};

#[test]
fn configure_five_then_two_draws() {
    let random = ThreadRandomProvider::new();
    let mut pool = DrawPool::new(1).expect("valid capacity");
    pool.configure(5).expect("valid capacity");

    let x = pool.draw(&random).expect("pool not exhausted");
    assert!((1..=5).contains(&x));
    let mut expected: BTreeSet<u32> = (1..=5).collect();
    expected.remove(&x);
    assert_eq!(pool.remaining_ids(), expected);
    assert_eq!(pool.drawn_ids(), vec![x]);

    let y = pool.draw(&random).expect("pool not exhausted");
    assert_ne!(x, y);
    expected.remove(&y);
    assert_eq!(pool.remaining_ids(), expected);
    assert_eq!(pool.drawn_ids(), vec![x, y]);
}

#[test]
fn fourth_draw_from_three_fails() {
    let random = ThreadRandomProvider::new();
    let mut pool = DrawPool::new(3).expect("valid capacity");
    for _ in 0..3 {
        pool.draw(&random).expect("pool not exhausted");
    }

    let err = pool.draw(&random).unwrap_err();
    assert_eq!(err, PoolError::Empty { capacity: 3 });
    assert_eq!(err.to_string(), "nothing left to draw: all 3 numbers have been drawn");
    assert_eq!(pool.drawn_ids().len(), 3);
}

#[test]
fn capacity_change_discards_history() {
    let random = SeededRandomProvider::new(99);
    let mut pool = DrawPool::new(10).expect("valid capacity");
    pool.draw(&random).expect("pool not exhausted");
    pool.draw(&random).expect("pool not exhausted");

    pool.configure(4).expect("valid capacity");
    assert_eq!(pool.remaining_ids(), (1..=4).collect());
    assert!(pool.drawn_ids().is_empty());
}

#[test]
fn rejected_configure_leaves_pool_alone() {
    let random = SeededRandomProvider::new(3);
    let mut pool = DrawPool::new(6).expect("valid capacity");
    let picked = pool.draw(&random).expect("pool not exhausted");

    assert!(matches!(
        pool.configure(0),
        Err(ConfigError::InvalidCapacity { capacity: 0 })
    ));
    assert_eq!(pool.capacity(), 6);
    assert_eq!(pool.drawn_ids(), vec![picked]);
}

#[test]
fn same_seed_same_order() {
    let order = |seed| {
        let random = SeededRandomProvider::new(seed);
        let mut pool = DrawPool::new(25).expect("valid capacity");
        std::iter::from_fn(|| pool.draw(&random).ok()).collect::<Vec<_>>()
    };
    assert_eq!(order(5), order(5));
    assert_ne!(order(5), order(6));
}
