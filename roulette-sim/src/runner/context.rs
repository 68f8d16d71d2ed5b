//! Per-iteration context handed to workloads.

use std::cell::Cell;
use std::rc::Rc;

use roulette_core::TimeProvider;

use crate::chaos::{Invariant, PickerView};
use crate::providers::{SimRandomProvider, SimTimeProvider};
use crate::{SimulationError, SimulationResult};

/// Counters a workload accumulates during one iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterationCounters {
    /// Operations observed.
    pub operations: u64,
    /// Spins that drew an identifier.
    pub spins: u64,
    /// Invariant evaluations.
    pub invariant_checks: u64,
}

/// Everything a workload needs for one seeded iteration.
pub struct SimContext {
    seed: u64,
    random: SimRandomProvider,
    time: SimTimeProvider,
    invariants: Rc<Vec<Box<dyn Invariant>>>,
    counters: Cell<IterationCounters>,
}

impl SimContext {
    /// Context for `seed`. The sim RNG must already be seeded.
    pub fn new(seed: u64, invariants: Rc<Vec<Box<dyn Invariant>>>) -> Self {
        Self {
            seed,
            random: SimRandomProvider::current(),
            time: SimTimeProvider::new(),
            invariants,
            counters: Cell::new(IterationCounters::default()),
        }
    }

    /// Seed of this iteration.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Deterministic randomness.
    pub fn random(&self) -> &SimRandomProvider {
        &self.random
    }

    /// Logical clock.
    pub fn time(&self) -> &SimTimeProvider {
        &self.time
    }

    /// Counters so far.
    pub fn counters(&self) -> IterationCounters {
        self.counters.get()
    }

    /// Run every invariant against `view`, failing on the first violation.
    pub fn observe(&self, view: &PickerView) -> SimulationResult<()> {
        let mut counters = self.counters.get();
        counters.operations += 1;
        if matches!(view.outcome, crate::chaos::OpOutcome::Spun(_)) {
            counters.spins += 1;
        }

        let sim_time = self.time.now().as_millis() as u64;
        let mut result = Ok(());
        for invariant in self.invariants.iter() {
            counters.invariant_checks += 1;
            if let Err(message) = invariant.check(view, sim_time) {
                tracing::error!(
                    invariant = invariant.name(),
                    seed = self.seed,
                    %message,
                    "invariant violated"
                );
                result = Err(SimulationError::InvariantViolation {
                    invariant: invariant.name().to_string(),
                    seed: self.seed,
                    message,
                });
                break;
            }
        }

        self.counters.set(counters);
        result
    }
}
