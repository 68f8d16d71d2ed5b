//! # Roulette Simulation
//!
//! Deterministic simulation for the roulette picker, in the style of
//! seed-driven simulation testing: every random choice comes from one
//! thread-local seeded generator, playback runs on a logical clock, and
//! invariants are checked after every operation.
//!
//! - **Reproducible**: the same seed replays the same run
//! - **Fast**: playback sleeps advance a logical clock instead of waiting
//!
//! ## Core Components
//!
//! - [`SimRandomProvider`] / [`SimTimeProvider`]: provider implementations
//! - [`SimulationBuilder`]: configure and run seeded iterations
//! - [`DrawWorkload`]: weighted mix of spins, interrupts, resets and reconfigurations
//! - [`chaos`]: the [`Invariant`] trait and built-in picker invariants
//!
//! ## Quick Start
//!
//! ```ignore
//! use roulette_sim::{DrawWorkload, SimulationBuilder};
//!
//! let report = SimulationBuilder::new()
//!     .workload(DrawWorkload::new(50..200))
//!     .default_invariants()
//!     .set_iterations(100)
//!     .run()
//!     .await;
//! assert!(report.is_success(), "{report}");
//! ```
//!
//! Debugging a failing seed:
//!
//! ```ignore
//! SimulationBuilder::new()
//!     .workload(DrawWorkload::new(50..200))
//!     .default_invariants()
//!     .set_debug_seeds(vec![failing_seed])
//!     .run()
//!     .await;
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod chaos;
pub mod config;
mod error;
pub mod providers;
pub mod runner;
pub mod sim;

pub use chaos::{Invariant, OpOutcome, PickerOp, PickerView, SpinRecord, invariant_fn};
pub use config::random_config_for_seed;
pub use error::{SimulationError, SimulationResult};
pub use providers::{SimRandomProvider, SimTimeProvider};
pub use runner::{
    DrawWorkload, IterationControl, OperationGenerator, SimContext, SimulationBuilder,
    SimulationMetrics, SimulationReport, WeightedGenerator, Workload,
};
pub use sim::{get_current_sim_seed, reset_sim_rng, set_sim_seed, sim_random, sim_random_range};
