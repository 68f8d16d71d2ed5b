//! Built-in picker invariants.

use std::collections::BTreeSet;

use roulette::wheel::FULL_TURN_DEG;

use super::invariant_trait::Invariant;
use super::view::{OpOutcome, PickerView};

const ANGLE_TOLERANCE: f64 = 1e-6;

/// Remaining and drawn partition `1..=capacity` exactly.
pub struct PoolConservation;

impl Invariant for PoolConservation {
    fn name(&self) -> &str {
        "pool_conservation"
    }

    fn check(&self, view: &PickerView, _sim_time: u64) -> Result<(), String> {
        let pool = &view.after;
        if pool.remaining.len() + pool.drawn.len() != pool.capacity as usize {
            return Err(format!(
                "{} remaining + {} drawn != capacity {}",
                pool.remaining.len(),
                pool.drawn.len(),
                pool.capacity
            ));
        }

        let remaining: BTreeSet<u32> = pool.remaining.iter().copied().collect();
        let drawn: BTreeSet<u32> = pool.drawn.iter().copied().collect();
        if drawn.len() != pool.drawn.len() {
            return Err(format!("duplicate in draw history {:?}", pool.drawn));
        }
        if let Some(id) = remaining.intersection(&drawn).next() {
            return Err(format!("{id} is both remaining and drawn"));
        }
        let all: BTreeSet<u32> = remaining.union(&drawn).copied().collect();
        if all != (1..=pool.capacity).collect() {
            return Err(format!("pool does not cover 1..={}", pool.capacity));
        }
        Ok(())
    }
}

/// A spin draws one identifier that was remaining and appends it to history.
pub struct DrawFromRemaining;

impl Invariant for DrawFromRemaining {
    fn name(&self) -> &str {
        "draw_from_remaining"
    }

    fn check(&self, view: &PickerView, _sim_time: u64) -> Result<(), String> {
        let OpOutcome::Spun(spin) = &view.outcome else {
            return Ok(());
        };
        if !view.before.remaining.contains(&spin.drawn) {
            return Err(format!("{} was not remaining before the spin", spin.drawn));
        }
        if view.after.remaining.contains(&spin.drawn) {
            return Err(format!("{} still remaining after the spin", spin.drawn));
        }
        let mut expected = view.before.drawn.clone();
        expected.push(spin.drawn);
        if view.after.drawn != expected {
            return Err(format!(
                "history {:?} is not {:?} plus {}",
                view.after.drawn, view.before.drawn, spin.drawn
            ));
        }
        if spin.slots != view.before.remaining.len() {
            return Err(format!(
                "wheel had {} slots for {} remaining",
                spin.slots,
                view.before.remaining.len()
            ));
        }
        Ok(())
    }
}

/// The wheel settles with the drawn identifier under the pointer.
pub struct SpinLandsOnDrawn;

impl Invariant for SpinLandsOnDrawn {
    fn name(&self) -> &str {
        "spin_lands_on_drawn"
    }

    fn check(&self, view: &PickerView, _sim_time: u64) -> Result<(), String> {
        let OpOutcome::Spun(spin) = &view.outcome else {
            return Ok(());
        };
        if spin.settled_on != spin.drawn {
            return Err(format!(
                "drew {} but the wheel settles on {}",
                spin.drawn, spin.settled_on
            ));
        }
        if spin.last_frame != spin.settle_angle {
            return Err(format!(
                "last frame {} differs from settle angle {}",
                spin.last_frame, spin.settle_angle
            ));
        }
        Ok(())
    }
}

/// Spins start where the wheel is and only move forward, by at least the
/// configured number of full turns.
pub struct SpinMovesForward;

impl Invariant for SpinMovesForward {
    fn name(&self) -> &str {
        "spin_moves_forward"
    }

    fn check(&self, view: &PickerView, _sim_time: u64) -> Result<(), String> {
        let OpOutcome::Spun(spin) = &view.outcome else {
            return Ok(());
        };
        if spin.start_angle != view.rotation_before {
            return Err(format!(
                "spin started at {} but the wheel was at {}",
                spin.start_angle, view.rotation_before
            ));
        }
        if spin.settle_angle <= spin.start_angle {
            return Err(format!(
                "settle {} not past start {}",
                spin.settle_angle, spin.start_angle
            ));
        }
        let min_travel = f64::from(view.min_full_turns) * FULL_TURN_DEG;
        if spin.settle_angle - spin.start_angle < min_travel - ANGLE_TOLERANCE {
            return Err(format!(
                "travelled {} degrees, less than {} full turns",
                spin.settle_angle - spin.start_angle,
                view.min_full_turns
            ));
        }

        let expected_rotation = spin.interrupted_at.unwrap_or(spin.settle_angle);
        if view.rotation_after != expected_rotation {
            return Err(format!(
                "rotation {} after spin, expected {}",
                view.rotation_after, expected_rotation
            ));
        }
        match spin.interrupted_at {
            Some(angle) if angle < spin.start_angle || angle > spin.settle_angle => Err(format!(
                "interrupted at {} outside [{}, {}]",
                angle, spin.start_angle, spin.settle_angle
            )),
            _ => Ok(()),
        }
    }
}

/// Refused operations leave the pool and the wheel untouched.
pub struct RefusalIsNoop;

impl Invariant for RefusalIsNoop {
    fn name(&self) -> &str {
        "refusal_is_noop"
    }

    fn check(&self, view: &PickerView, _sim_time: u64) -> Result<(), String> {
        if !matches!(view.outcome, OpOutcome::Exhausted | OpOutcome::Rejected) {
            return Ok(());
        }
        if view.before != view.after {
            return Err(format!("{:?} changed the pool", view.op));
        }
        if view.rotation_before != view.rotation_after {
            return Err(format!("{:?} moved the wheel", view.op));
        }
        if matches!(view.outcome, OpOutcome::Exhausted) && !view.before.remaining.is_empty() {
            return Err("spin refused while identifiers remain".to_string());
        }
        Ok(())
    }
}

/// Reset and configure hand back a full pool with no history.
pub struct RefillIsComplete;

impl Invariant for RefillIsComplete {
    fn name(&self) -> &str {
        "refill_is_complete"
    }

    fn check(&self, view: &PickerView, _sim_time: u64) -> Result<(), String> {
        let expected_capacity = match view.outcome {
            OpOutcome::Reset => view.before.capacity,
            OpOutcome::Configured { capacity } => capacity,
            _ => return Ok(()),
        };
        if view.after.capacity != expected_capacity {
            return Err(format!(
                "capacity {} after refill, expected {}",
                view.after.capacity, expected_capacity
            ));
        }
        if !view.after.drawn.is_empty() {
            return Err(format!("history {:?} survived a refill", view.after.drawn));
        }
        if view.rotation_before != view.rotation_after {
            return Err("refill moved the wheel".to_string());
        }
        Ok(())
    }
}

/// Teasers only show identifiers that are still remaining.
pub struct TeasersFromRemaining;

impl Invariant for TeasersFromRemaining {
    fn name(&self) -> &str {
        "teasers_from_remaining"
    }

    fn check(&self, view: &PickerView, _sim_time: u64) -> Result<(), String> {
        let OpOutcome::Teased(ids) = &view.outcome else {
            return Ok(());
        };
        if let Some(id) = ids.iter().find(|id| !view.after.remaining.contains(id)) {
            return Err(format!("teaser {id} is not remaining"));
        }
        if view.before != view.after {
            return Err("teasers changed the pool".to_string());
        }
        Ok(())
    }
}

/// Every built-in invariant.
pub fn default_invariants() -> Vec<Box<dyn Invariant>> {
    vec![
        Box::new(PoolConservation),
        Box::new(DrawFromRemaining),
        Box::new(SpinLandsOnDrawn),
        Box::new(SpinMovesForward),
        Box::new(RefusalIsNoop),
        Box::new(RefillIsComplete),
        Box::new(TeasersFromRemaining),
    ]
}
