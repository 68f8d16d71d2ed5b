//! Operation generation for autonomous picker workloads.
//!
//! Rather than scripting a fixed sequence of draws, a workload asks a
//! generator for its next operation. The mix of operations is set by weights,
//! so runs exercise interleavings a hand-written test would not.
//!
//! ```ignore
//! let mut generator = WeightedGenerator::new()
//!     .with_operation(PickerOp::Spin, 0.8)
//!     .with_operation(PickerOp::Reset, 0.2);
//! let op = generator.generate(&SimRandomProvider::current());
//! ```

use roulette_core::RandomProvider;

/// Source of operations for an autonomous workload.
pub trait OperationGenerator {
    /// The type of operation this generator produces.
    type Operation: Clone;

    /// Produce the next operation.
    fn generate<R: RandomProvider>(&mut self, rng: &R) -> Self::Operation;

    /// `(operation, weight)` pairs, for introspection.
    fn weight_distribution(&self) -> Vec<(Self::Operation, f64)>;

    /// Produce `count` operations.
    fn generate_sequence<R: RandomProvider>(
        &mut self,
        rng: &R,
        count: usize,
    ) -> Vec<Self::Operation> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

/// Generator with a custom probability per operation.
///
/// Weights are relative: `[2.0, 1.0]` gives a 67% / 33% split.
pub struct WeightedGenerator<T: Clone> {
    operations: Vec<T>,
    weights: Vec<f64>,
    cumulative_weights: Vec<f64>,
}

impl<T: Clone> WeightedGenerator<T> {
    /// Create a generator with no operations.
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
            weights: Vec::new(),
            cumulative_weights: Vec::new(),
        }
    }

    /// Add an operation with the given relative weight.
    ///
    /// # Panics
    ///
    /// Panics if `weight` is not positive.
    pub fn with_operation(mut self, operation: T, weight: f64) -> Self {
        assert!(weight > 0.0, "Weight must be positive, got {}", weight);
        self.operations.push(operation);
        self.weights.push(weight);
        self.recalculate_cumulative_weights();
        self
    }

    fn recalculate_cumulative_weights(&mut self) {
        let total: f64 = self.weights.iter().sum();
        let mut cumulative = 0.0;
        self.cumulative_weights = self
            .weights
            .iter()
            .map(|&w| {
                cumulative += w / total;
                cumulative
            })
            .collect();
    }
}

impl<T: Clone> Default for WeightedGenerator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> OperationGenerator for WeightedGenerator<T> {
    type Operation = T;

    fn generate<R: RandomProvider>(&mut self, rng: &R) -> Self::Operation {
        assert!(
            !self.operations.is_empty(),
            "WeightedGenerator has no operations"
        );

        let rand_val = rng.random_ratio();
        let index = self
            .cumulative_weights
            .iter()
            .position(|&w| rand_val <= w)
            .unwrap_or(self.operations.len() - 1);

        self.operations[index].clone()
    }

    fn weight_distribution(&self) -> Vec<(Self::Operation, f64)> {
        self.operations
            .iter()
            .zip(self.weights.iter())
            .map(|(op, &w)| (op.clone(), w))
            .collect()
    }
}
