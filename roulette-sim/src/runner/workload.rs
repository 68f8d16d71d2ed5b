//! Workload trait for simulation testing.
//!
//! A workload drives a picker through one seeded iteration, reporting the
//! state around each operation to [`SimContext::observe`] so invariants run
//! after every step.

use async_trait::async_trait;

use crate::SimulationResult;

use super::context::SimContext;

/// A workload that participates in simulation testing.
#[async_trait(?Send)]
pub trait Workload: 'static {
    /// Name of this workload for reporting.
    fn name(&self) -> &str;

    /// Main workload logic for one iteration.
    async fn run(&mut self, ctx: &SimContext) -> SimulationResult<()>;

    /// Validate end-of-iteration properties.
    ///
    /// Default implementation is a no-op.
    async fn check(&mut self, _ctx: &SimContext) -> SimulationResult<()> {
        Ok(())
    }
}
