//! Thread-local random number generation for simulation.
//!
//! Every random choice made during a simulated run goes through one
//! thread-local `ChaCha8Rng`, so a seed fully determines the run. Each test
//! thread has its own generator, which keeps parallel tests independent.

use rand::distr::{Distribution, StandardUniform, uniform::SampleUniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::{Cell, RefCell};

thread_local! {
    /// Thread-local random number generator for simulation.
    static SIM_RNG: RefCell<ChaCha8Rng> = RefCell::new(ChaCha8Rng::seed_from_u64(0));

    /// Seed last set via [`set_sim_seed`], kept for failure reports.
    static CURRENT_SEED: Cell<u64> = const { Cell::new(0) };

    /// RNG calls since the last seed or reset.
    static RNG_CALL_COUNT: Cell<u64> = const { Cell::new(0) };
}

fn pre_sample() {
    RNG_CALL_COUNT.with(|c| c.set(c.get() + 1));
}

/// Generate a random value using the thread-local simulation RNG.
pub fn sim_random<T>() -> T
where
    StandardUniform: Distribution<T>,
{
    pre_sample();
    SIM_RNG.with(|rng| rng.borrow_mut().sample(StandardUniform))
}

/// Generate a random value within `range` (exclusive upper bound).
pub fn sim_random_range<T>(range: std::ops::Range<T>) -> T
where
    T: SampleUniform + PartialOrd,
{
    pre_sample();
    SIM_RNG.with(|rng| rng.borrow_mut().random_range(range))
}

/// Like [`sim_random_range`], but returns `range.start` for an empty range
/// without consuming randomness.
pub fn sim_random_range_or_default<T>(range: std::ops::Range<T>) -> T
where
    T: SampleUniform + PartialOrd + Clone,
{
    if range.start >= range.end {
        range.start
    } else {
        sim_random_range(range)
    }
}

/// Random `f64` in `[0.0, 1.0)`.
pub fn sim_random_f64() -> f64 {
    pre_sample();
    SIM_RNG.with(|rng| rng.borrow_mut().sample(StandardUniform))
}

/// Seed the thread-local simulation RNG and reset the call count.
pub fn set_sim_seed(seed: u64) {
    SIM_RNG.with(|rng| {
        *rng.borrow_mut() = ChaCha8Rng::seed_from_u64(seed);
    });
    CURRENT_SEED.with(|current| current.set(seed));
    RNG_CALL_COUNT.with(|c| c.set(0));
}

/// Seed last set via [`set_sim_seed`], or 0.
pub fn get_current_sim_seed() -> u64 {
    CURRENT_SEED.with(|current| current.get())
}

/// Return the RNG to its initial state between runs.
pub fn reset_sim_rng() {
    SIM_RNG.with(|rng| {
        *rng.borrow_mut() = ChaCha8Rng::seed_from_u64(0);
    });
    CURRENT_SEED.with(|current| current.set(0));
    RNG_CALL_COUNT.with(|c| c.set(0));
}

/// RNG calls since the last seed or reset.
pub fn get_rng_call_count() -> u64 {
    RNG_CALL_COUNT.with(|c| c.get())
}
