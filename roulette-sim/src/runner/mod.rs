//! Running seeded picker simulations.

pub mod builder;
pub mod context;
pub mod draw_workload;
pub mod operation_gen;
pub mod report;
pub mod workload;

pub use builder::{IterationControl, SimulationBuilder};
pub use context::{IterationCounters, SimContext};
pub use draw_workload::DrawWorkload;
pub use operation_gen::{OperationGenerator, WeightedGenerator};
pub use report::{SeedFailure, SimulationMetrics, SimulationReport};
pub use workload::Workload;
