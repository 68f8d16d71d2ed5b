//! What invariants get to see after each operation.

use roulette::PoolSnapshot;

/// Operations a draw workload performs on a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOp {
    /// Draw one identifier and plan its spin.
    Spin,
    /// Spin, play part of the animation, and interrupt it.
    SpinAndInterrupt,
    /// Put every identifier back.
    Reset,
    /// Replace the pool with a new random capacity.
    Configure,
    /// Configure with an invalid capacity.
    ConfigureInvalid,
    /// Ask for teaser highlights.
    Teasers,
}

/// Summary of a completed spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinRecord {
    /// Identifier drawn.
    pub drawn: u32,
    /// Identifier under the pointer at the settle angle.
    pub settled_on: u32,
    /// Rotation when the spin started.
    pub start_angle: f64,
    /// Settle angle.
    pub settle_angle: f64,
    /// Last frame of the trajectory.
    pub last_frame: f64,
    /// Slots on the wheel for this spin.
    pub slots: usize,
    /// Angle the host stopped at, when interrupted.
    pub interrupted_at: Option<f64>,
}

/// Result of the operation just performed.
#[derive(Debug, Clone, PartialEq)]
pub enum OpOutcome {
    /// A spin happened.
    Spun(SpinRecord),
    /// The pool was exhausted and the spin was refused.
    Exhausted,
    /// Pool reset.
    Reset,
    /// Pool replaced with `capacity` identifiers.
    Configured {
        /// New capacity.
        capacity: u32,
    },
    /// Configuration was refused.
    Rejected,
    /// Teasers returned.
    Teased(Vec<u32>),
}

/// Picker state before and after one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerView {
    /// Operation performed.
    pub op: PickerOp,
    /// What it did.
    pub outcome: OpOutcome,
    /// Pool before the operation.
    pub before: PoolSnapshot,
    /// Pool after the operation.
    pub after: PoolSnapshot,
    /// Rotation before the operation.
    pub rotation_before: f64,
    /// Rotation after the operation.
    pub rotation_after: f64,
    /// Configured minimum extra turns.
    pub min_full_turns: u32,
}
