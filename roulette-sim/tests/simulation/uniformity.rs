//! Chi-square checks that draws are uniform over what remains.

use roulette::DrawPool;
use roulette_sim::{SimRandomProvider, set_sim_seed};

/// 99.9th percentile of the chi-square distribution by degrees of freedom.
fn chi_square_critical(df: usize) -> f64 {
    match df {
        4 => 18.467,
        7 => 24.322,
        9 => 27.877,
        _ => panic!("no critical value tabulated for df={df}"),
    }
}

fn chi_square(counts: &[u64], trials: u64) -> f64 {
    let expected = trials as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn first_draw_is_uniform() {
    const CAPACITY: u32 = 10;
    const TRIALS: u64 = 20_000;

    let random = SimRandomProvider::new(0xC0FFEE);
    let mut counts = vec![0u64; CAPACITY as usize];
    for _ in 0..TRIALS {
        let mut pool = DrawPool::new(CAPACITY).expect("valid capacity");
        let first = pool.draw(&random).expect("full pool");
        counts[(first - 1) as usize] += 1;
    }

    let statistic = chi_square(&counts, TRIALS);
    assert!(
        statistic < chi_square_critical(9),
        "chi-square {statistic:.2} over critical, counts {counts:?}"
    );
}

#[test]
fn later_draws_are_uniform_over_remaining() {
    // After drawing 3 from 8, the fourth draw must be uniform over the
    // 5 survivors, whatever order the pool happens to store them in.
    const TRIALS: u64 = 20_000;
    set_sim_seed(77);
    let random = SimRandomProvider::current();

    let mut counts = vec![0u64; 5];
    for _ in 0..TRIALS {
        let mut pool = DrawPool::new(8).expect("valid capacity");
        for _ in 0..3 {
            pool.draw(&random).expect("pool not exhausted");
        }
        let survivors = pool.remaining_sorted();
        let fourth = pool.draw(&random).expect("pool not exhausted");
        let position = survivors
            .iter()
            .position(|&id| id == fourth)
            .expect("drawn from survivors");
        counts[position] += 1;
    }

    let statistic = chi_square(&counts, TRIALS);
    assert!(
        statistic < chi_square_critical(4),
        "chi-square {statistic:.2} over critical, counts {counts:?}"
    );
}
