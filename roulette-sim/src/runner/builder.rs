//! Simulation builder pattern for configuring and running experiments.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::time::{Duration, Instant};

use roulette_core::TimeProvider;
use tracing::instrument;

use crate::chaos::{Invariant, PickerView, default_invariants};

use super::context::SimContext;
use super::report::{SeedFailure, SimulationReport};
use super::workload::Workload;

/// How many iterations a simulation runs.
#[derive(Debug, Clone)]
pub enum IterationControl {
    /// Run a fixed number of iterations
    FixedCount(usize),
    /// Run until this much wall-clock time has passed
    TimeLimit(Duration),
}

/// Builder pattern for configuring and running simulation experiments.
pub struct SimulationBuilder {
    iteration_control: IterationControl,
    workloads: Vec<Box<dyn Workload>>,
    seeds: Vec<u64>,
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new empty simulation builder.
    pub fn new() -> Self {
        Self {
            iteration_control: IterationControl::FixedCount(1),
            workloads: Vec::new(),
            seeds: Vec::new(),
            invariants: Vec::new(),
        }
    }

    /// Add a workload; it runs once per iteration.
    pub fn workload(mut self, w: impl Workload) -> Self {
        self.workloads.push(Box::new(w));
        self
    }

    /// Add an invariant checked after every operation.
    pub fn invariant(mut self, i: impl Invariant + 'static) -> Self {
        self.invariants.push(Box::new(i));
        self
    }

    /// Add a closure-based invariant.
    pub fn invariant_fn(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&PickerView, u64) -> Result<(), String> + 'static,
    ) -> Self {
        self.invariants.push(crate::chaos::invariant_fn(name, f));
        self
    }

    /// Add every built-in invariant.
    pub fn default_invariants(mut self) -> Self {
        self.invariants.extend(default_invariants());
        self
    }

    /// Set the number of iterations to run.
    pub fn set_iterations(mut self, iterations: usize) -> Self {
        self.iteration_control = IterationControl::FixedCount(iterations);
        self
    }

    /// Run for a specific wall-clock time duration.
    pub fn set_time_limit(mut self, duration: Duration) -> Self {
        self.iteration_control = IterationControl::TimeLimit(duration);
        self
    }

    fn should_continue(&self, iteration: usize, started: Instant) -> bool {
        match &self.iteration_control {
            IterationControl::FixedCount(count) => iteration < *count,
            IterationControl::TimeLimit(limit) => started.elapsed() < *limit,
        }
    }

    /// Set specific seeds for deterministic debugging and regression testing.
    ///
    /// Seeds are used in order; iterations beyond them get derived seeds.
    pub fn set_debug_seeds(mut self, seeds: Vec<u64>) -> Self {
        self.seeds = seeds;
        self
    }

    fn seed_for(&self, base_seed: u64, iteration: usize) -> u64 {
        match self.seeds.get(iteration) {
            Some(&seed) => seed,
            None => {
                let mut hasher = DefaultHasher::new();
                base_seed.hash(&mut hasher);
                iteration.hash(&mut hasher);
                hasher.finish()
            }
        }
    }

    /// Run the simulation and generate a report.
    #[instrument(skip_all)]
    pub async fn run(mut self) -> SimulationReport {
        let mut report = SimulationReport::default();
        if self.workloads.is_empty() {
            return report;
        }

        let base_seed = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(12345);
        let invariants = Rc::new(std::mem::take(&mut self.invariants));
        let mut workloads = std::mem::take(&mut self.workloads);

        let started = Instant::now();
        let mut iteration = 0;

        while self.should_continue(iteration, started) {
            let seed = self.seed_for(base_seed, iteration);
            iteration += 1;
            tracing::info!("Starting iteration {} with seed {}", iteration, seed);

            crate::sim::reset_sim_rng();
            crate::sim::set_sim_seed(seed);
            let ctx = SimContext::new(seed, Rc::clone(&invariants));
            let start_time = Instant::now();

            let mut failure = None;
            for workload in workloads.iter_mut() {
                let outcome = match workload.run(&ctx).await {
                    Ok(()) => workload.check(&ctx).await,
                    Err(err) => Err(err),
                };
                if let Err(err) = outcome {
                    tracing::warn!(seed, workload = workload.name(), %err, "iteration failed");
                    failure = Some(SeedFailure {
                        seed,
                        workload: workload.name().to_string(),
                        error: err.to_string(),
                    });
                    break;
                }
            }

            let counters = ctx.counters();
            report.iterations += 1;
            report.seeds_used.push(seed);
            report.metrics.wall_time += start_time.elapsed();
            report.metrics.simulated_time += ctx.time().now();
            report.metrics.operations += counters.operations;
            report.metrics.spins += counters.spins;
            report.metrics.invariant_checks += counters.invariant_checks;

            match failure {
                Some(failure) => {
                    report.failed_runs += 1;
                    report.seeds_failing.push(seed);
                    report.failures.push(failure);
                }
                None => report.successful_runs += 1,
            }
        }

        tracing::info!(
            "Simulation completed: {}/{} iterations successful",
            report.successful_runs,
            report.iterations
        );
        report
    }
}
