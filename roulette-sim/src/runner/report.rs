//! Simulation metrics and reporting.

use std::fmt;
use std::time::Duration;

/// Metrics aggregated across iterations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationMetrics {
    /// Wall-clock time taken for the simulation
    pub wall_time: Duration,
    /// Logical time spent in playback
    pub simulated_time: Duration,
    /// Operations performed
    pub operations: u64,
    /// Spins that drew an identifier
    pub spins: u64,
    /// Invariant evaluations
    pub invariant_checks: u64,
}

/// A failed iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedFailure {
    /// Seed that reproduces the failure.
    pub seed: u64,
    /// Workload that failed.
    pub workload: String,
    /// Error description.
    pub error: String,
}

/// Report of a simulation run.
#[derive(Debug, Clone, Default)]
pub struct SimulationReport {
    /// Number of iterations executed
    pub iterations: usize,
    /// Number of successful runs
    pub successful_runs: usize,
    /// Number of failed runs
    pub failed_runs: usize,
    /// Aggregated metrics across all runs
    pub metrics: SimulationMetrics,
    /// Seeds used for each iteration
    pub seeds_used: Vec<u64>,
    /// failed seeds
    pub seeds_failing: Vec<u64>,
    /// Failure details, one per failing iteration
    pub failures: Vec<SeedFailure>,
}

impl SimulationReport {
    /// Calculate the success rate as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            (self.successful_runs as f64 / self.iterations as f64) * 100.0
        }
    }

    /// Get the average wall time per iteration.
    pub fn average_wall_time(&self) -> Duration {
        if self.iterations == 0 {
            Duration::ZERO
        } else {
            self.metrics.wall_time / self.iterations as u32
        }
    }

    /// Get the average number of operations per iteration.
    pub fn average_operations(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.metrics.operations as f64 / self.iterations as f64
        }
    }

    /// True when every iteration passed.
    pub fn is_success(&self) -> bool {
        self.failed_runs == 0
    }

    /// Print the report to stderr.
    pub fn eprint(&self) {
        eprint!("{}", self);
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Simulation Report ===")?;
        writeln!(f, "Iterations: {}", self.iterations)?;
        writeln!(f, "Successful: {}", self.successful_runs)?;
        writeln!(f, "Failed: {}", self.failed_runs)?;
        writeln!(f, "Success Rate: {:.2}%", self.success_rate())?;
        writeln!(f)?;
        writeln!(f, "Average Wall Time: {:?}", self.average_wall_time())?;
        writeln!(f, "Simulated Playback Time: {:?}", self.metrics.simulated_time)?;
        writeln!(f, "Average Operations: {:.1}", self.average_operations())?;
        writeln!(f, "Spins: {}", self.metrics.spins)?;
        writeln!(f, "Invariant Checks: {}", self.metrics.invariant_checks)?;

        if !self.seeds_failing.is_empty() {
            writeln!(f)?;
            writeln!(f, "Faulty seeds: {:?}", self.seeds_failing)?;
        }

        if !self.failures.is_empty() {
            writeln!(f)?;
            writeln!(f, "=== Failures ===")?;
            for failure in &self.failures {
                writeln!(
                    f,
                    "  - seed {} [{}]: {}",
                    failure.seed, failure.workload, failure.error
                )?;
            }
        }

        writeln!(f)?;
        Ok(())
    }
}
