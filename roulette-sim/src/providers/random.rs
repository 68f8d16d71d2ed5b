//! Simulation random provider over the thread-local deterministic RNG.

use rand::distr::{Distribution, StandardUniform, uniform::SampleUniform};
use roulette_core::RandomProvider;
use std::ops::Range;

use crate::sim::{set_sim_seed, sim_random, sim_random_range};

/// Random provider backed by the thread-local simulation RNG.
///
/// Holds no state of its own: every clone, and every other caller of the
/// `sim_random*` functions on this thread, consumes the same stream.
#[derive(Clone, Debug, Default)]
pub struct SimRandomProvider {
    _marker: std::marker::PhantomData<()>,
}

impl SimRandomProvider {
    /// Seed the thread-local RNG with `seed` and return a provider over it.
    pub fn new(seed: u64) -> Self {
        set_sim_seed(seed);
        Self::current()
    }

    /// Provider over the thread-local RNG as currently seeded.
    pub fn current() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl RandomProvider for SimRandomProvider {
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>,
    {
        sim_random()
    }

    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        sim_random_range(range)
    }

    fn random_ratio(&self) -> f64 {
        sim_random::<f64>()
    }

    fn random_bool(&self, probability: f64) -> bool {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be between 0.0 and 1.0, got {}",
            probability
        );
        sim_random::<f64>() < probability
    }
}
