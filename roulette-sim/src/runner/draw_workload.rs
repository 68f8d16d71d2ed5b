//! Autonomous workload that spins, interrupts, resets and reconfigures a picker.

use std::ops::Range;

use async_trait::async_trait;
use roulette::{Flow, Frame, Picker, PickerError, play};

use crate::chaos::{OpOutcome, PickerOp, PickerView, SpinRecord};
use crate::config::random_config_for_seed;
use crate::providers::SimRandomProvider;
use crate::sim::{sim_random_range, sim_random_range_or_default};
use crate::{SimulationError, SimulationResult};

use super::context::SimContext;
use super::operation_gen::{OperationGenerator, WeightedGenerator};
use super::workload::Workload;

/// Largest capacity the workload reconfigures to.
const MAX_SIM_CAPACITY: u32 = 64;

/// Drives one picker per iteration with a weighted mix of [`PickerOp`]s.
///
/// Each iteration starts from [`random_config_for_seed`] and performs a
/// random number of operations within `operations`.
pub struct DrawWorkload {
    name: String,
    operations: Range<usize>,
    generator: WeightedGenerator<PickerOp>,
}

impl DrawWorkload {
    /// Workload with the default operation mix.
    pub fn new(operations: Range<usize>) -> Self {
        let generator = WeightedGenerator::new()
            .with_operation(PickerOp::Spin, 6.0)
            .with_operation(PickerOp::SpinAndInterrupt, 1.5)
            .with_operation(PickerOp::Reset, 0.5)
            .with_operation(PickerOp::Configure, 0.5)
            .with_operation(PickerOp::ConfigureInvalid, 0.25)
            .with_operation(PickerOp::Teasers, 0.5);
        Self::with_generator(operations, generator)
    }

    /// Workload with a custom operation mix.
    pub fn with_generator(operations: Range<usize>, generator: WeightedGenerator<PickerOp>) -> Self {
        Self {
            name: "draw".to_string(),
            operations,
            generator,
        }
    }

    /// Rename the workload for reporting.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait(?Send)]
impl Workload for DrawWorkload {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&mut self, ctx: &SimContext) -> SimulationResult<()> {
        let config = random_config_for_seed();
        tracing::debug!(seed = ctx.seed(), ?config, "starting draw workload");
        let mut picker = Picker::new(config, ctx.random().clone()).map_err(PickerError::from)?;

        let count = sim_random_range_or_default(self.operations.clone());
        for _ in 0..count {
            let op = self.generator.generate(ctx.random());
            let view = execute(&mut picker, op, ctx).await?;
            ctx.observe(&view)?;
        }
        Ok(())
    }
}

async fn execute(
    picker: &mut Picker<SimRandomProvider>,
    op: PickerOp,
    ctx: &SimContext,
) -> SimulationResult<PickerView> {
    let before = picker.pool().snapshot();
    let rotation_before = picker.rotation().angle();

    let outcome = match op {
        PickerOp::Spin => spin(picker, ctx, false).await?,
        PickerOp::SpinAndInterrupt => spin(picker, ctx, true).await?,
        PickerOp::Reset => {
            picker.reset();
            OpOutcome::Reset
        }
        PickerOp::Configure => {
            let capacity = sim_random_range(1..MAX_SIM_CAPACITY + 1);
            picker.configure(capacity).map_err(PickerError::from)?;
            OpOutcome::Configured { capacity }
        }
        PickerOp::ConfigureInvalid => {
            if picker.configure(0).is_ok() {
                return Err(SimulationError::Unexpected(
                    "configure(0) was accepted".to_string(),
                ));
            }
            OpOutcome::Rejected
        }
        PickerOp::Teasers => OpOutcome::Teased(picker.teasers(sim_random_range(0..8))),
    };

    Ok(PickerView {
        op,
        outcome,
        before,
        after: picker.pool().snapshot(),
        rotation_before,
        rotation_after: picker.rotation().angle(),
        min_full_turns: picker.config().min_full_turns,
    })
}

async fn spin(
    picker: &mut Picker<SimRandomProvider>,
    ctx: &SimContext,
    interrupt: bool,
) -> SimulationResult<OpOutcome> {
    let spin = match picker.spin() {
        Ok(spin) => spin,
        Err(PickerError::Pool(_)) => return Ok(OpOutcome::Exhausted),
        Err(err) => return Err(err.into()),
    };

    let stop_at = if interrupt {
        Some(sim_random_range(0..spin.frame_count()))
    } else {
        None
    };
    let mut sink = |frame: &Frame| {
        if Some(frame.index) == stop_at {
            Flow::Stop
        } else {
            Flow::Continue
        }
    };
    let playback = play(&spin, ctx.time(), &mut sink).await?;

    let interrupted_at = if playback.completed {
        None
    } else {
        picker.interrupt_at(playback.last_angle)?;
        Some(playback.last_angle)
    };

    Ok(OpOutcome::Spun(SpinRecord {
        drawn: spin.drawn,
        settled_on: spin.settled_on(),
        start_angle: spin.start_angle,
        settle_angle: spin.settle_angle,
        last_frame: spin.frames.clone().last().unwrap_or(spin.start_angle),
        slots: spin.layout.len(),
        interrupted_at,
    }))
}
