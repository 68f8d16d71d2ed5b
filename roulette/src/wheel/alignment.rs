//! Settle-angle computation.
//!
//! Given where the wheel currently is, find the rotation that parks the
//! target slot's center under the pointer, moving forward only, plus a few
//! extra full turns so the spin reads as a spin.

use roulette_core::{AlignmentError, AlignmentResult, ConfigError, ConfigResult, RandomProvider};
use serde::{Deserialize, Serialize};

use super::layout::{FULL_TURN_DEG, WheelLayout, normalize_angle};

/// Upper bound on extra full turns per spin.
pub const MAX_FULL_TURNS: u32 = 100;

/// Offsets below this are treated as "already aligned".
const ALIGNED_EPSILON: f64 = 1e-9;

/// Inclusive range of extra full turns added to every spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRange {
    min: u32,
    max: u32,
}

impl TurnRange {
    /// Build a range, rejecting `min > max` and absurd maxima.
    pub fn new(min: u32, max: u32) -> ConfigResult<Self> {
        if min > max {
            return Err(ConfigError::InvalidTurns { min, max });
        }
        if max > MAX_FULL_TURNS {
            return Err(ConfigError::TooManyTurns {
                max,
                limit: MAX_FULL_TURNS,
            });
        }
        Ok(Self { min, max })
    }

    /// Always exactly `turns` extra turns.
    pub fn exactly(turns: u32) -> ConfigResult<Self> {
        Self::new(turns, turns)
    }

    /// Minimum extra turns.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Maximum extra turns.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Pick a turn count uniformly from `[min, max]`.
    pub fn sample<R: RandomProvider>(&self, random: &R) -> u32 {
        if self.min == self.max {
            self.min
        } else {
            random.random_range(self.min..self.max + 1)
        }
    }
}

impl Default for TurnRange {
    fn default() -> Self {
        Self { min: 3, max: 5 }
    }
}

fn ensure_finite(name: &'static str, value: f64) -> AlignmentResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AlignmentError::NonFiniteAngle { name, value })
    }
}

/// Forward rotation in `(0, 360]` that brings `target`'s slot center from
/// its position at `current_angle` to `pointer_deg`.
pub fn alignment_offset(
    layout: &WheelLayout,
    target: u32,
    pointer_deg: f64,
    current_angle: f64,
) -> AlignmentResult<f64> {
    ensure_finite("pointer_deg", pointer_deg)?;
    ensure_finite("current_angle", current_angle)?;
    let slot_angle = layout.angle_of(target)?;

    let offset = normalize_angle(pointer_deg - slot_angle - current_angle);
    if offset < ALIGNED_EPSILON || FULL_TURN_DEG - offset < ALIGNED_EPSILON {
        Ok(FULL_TURN_DEG)
    } else {
        Ok(offset)
    }
}

/// Settle angle for `target` given a number of extra full turns.
///
/// Deterministic core of [`target_rotation`].
pub fn settle_angle(
    layout: &WheelLayout,
    target: u32,
    pointer_deg: f64,
    current_angle: f64,
    extra_turns: u32,
) -> AlignmentResult<f64> {
    let offset = alignment_offset(layout, target, pointer_deg, current_angle)?;
    let mut settle = current_angle + offset + f64::from(extra_turns) * FULL_TURN_DEG;
    // Large cumulative angles can swallow a tiny offset.
    if settle <= current_angle {
        settle += FULL_TURN_DEG;
    }
    Ok(settle)
}

/// Final rotation that lands `target` under the pointer.
///
/// The result is strictly greater than `current_angle`, at least
/// `turns.min() * 360` past it, and satisfies
/// `(result + layout[target]) mod 360 == pointer_deg mod 360`.
pub fn target_rotation<R: RandomProvider>(
    layout: &WheelLayout,
    target: u32,
    pointer_deg: f64,
    current_angle: f64,
    turns: TurnRange,
    random: &R,
) -> AlignmentResult<f64> {
    // Validate before consuming randomness.
    alignment_offset(layout, target, pointer_deg, current_angle)?;
    let extra_turns = turns.sample(random);
    let settle = settle_angle(layout, target, pointer_deg, current_angle, extra_turns)?;

    tracing::debug!(
        target,
        current_angle,
        settle,
        extra_turns,
        "computed settle angle"
    );
    Ok(settle)
}
