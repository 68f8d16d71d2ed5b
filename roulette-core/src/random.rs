//! Random number generation provider abstraction.
//!
//! The picker never reaches for a global RNG directly. It draws through a
//! [`RandomProvider`], so production code gets the thread-local OS-seeded
//! generator while simulations and `--seed` runs plug in a seeded,
//! reproducible one.

use rand::distr::{Distribution, StandardUniform, uniform::SampleUniform};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

/// Provider trait for random number generation.
///
/// Implementations decide where randomness comes from. Every method takes
/// `&self` so a provider can be shared by value (`Clone`) between the pool
/// and the wheel without threading a mutable RNG through every call.
pub trait RandomProvider: Clone {
    /// Generate a random value of type T.
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>;

    /// Generate a random value within a specified range.
    ///
    /// The range is exclusive of the upper bound (start..end). Every value in
    /// the range is equally likely.
    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd;

    /// Generate a random f64 between 0.0 and 1.0.
    fn random_ratio(&self) -> f64;

    /// Generate a random bool with the given probability of being true.
    ///
    /// The probability should be between 0.0 and 1.0.
    fn random_bool(&self, probability: f64) -> bool;
}

/// Production random provider using the thread-local RNG.
///
/// Uses `rand::rng()` (thread-local, non-cryptographic), which is plenty for
/// picking presentation order.
///
/// # Example
///
/// ```rust
/// use roulette_core::{RandomProvider, ThreadRandomProvider};
///
/// let random = ThreadRandomProvider::new();
/// let slot = random.random_range(0..12usize);
/// assert!(slot < 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThreadRandomProvider;

impl ThreadRandomProvider {
    /// Create a new production random provider.
    pub fn new() -> Self {
        Self
    }
}

thread_local! {
    static RNG: RefCell<rand::rngs::ThreadRng> = RefCell::new(rand::rng());
}

impl RandomProvider for ThreadRandomProvider {
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>,
    {
        RNG.with(|rng| rng.borrow_mut().random())
    }

    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        RNG.with(|rng| rng.borrow_mut().random_range(range))
    }

    fn random_ratio(&self) -> f64 {
        RNG.with(|rng| rng.borrow_mut().random())
    }

    fn random_bool(&self, probability: f64) -> bool {
        self.random_ratio() < probability
    }
}

/// Seeded random provider for reproducible draw orders.
///
/// Clones share one `ChaCha8Rng` stream, so a picker and anything holding a
/// clone of its provider consume the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandomProvider {
    seed: u64,
    rng: Rc<RefCell<ChaCha8Rng>>,
}

impl SeededRandomProvider {
    /// Create a provider whose sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Rc::new(RefCell::new(ChaCha8Rng::seed_from_u64(seed))),
        }
    }

    /// Seed this provider was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomProvider for SeededRandomProvider {
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>,
    {
        self.rng.borrow_mut().random()
    }

    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.borrow_mut().random_range(range)
    }

    fn random_ratio(&self) -> f64 {
        self.rng.borrow_mut().random()
    }

    fn random_bool(&self, probability: f64) -> bool {
        self.random_ratio() < probability
    }
}
