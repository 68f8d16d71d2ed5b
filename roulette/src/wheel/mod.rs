//! Wheel geometry: where slots sit, how far to turn, and how to get there.
//!
//! - [`layout`]: identifiers to slot center angles
//! - [`target_rotation`]: forward settle angle that parks a slot under the pointer
//! - [`trajectory`]: eased per-frame angles from the current rotation to the settle angle
//! - [`FramePacing`]: how long each frame is shown

mod alignment;
mod layout;
mod pacing;
mod trajectory;

pub use alignment::{
    MAX_FULL_TURNS, TurnRange, alignment_offset, settle_angle, target_rotation,
};
pub use layout::{FULL_TURN_DEG, WheelLayout, layout, normalize_angle};
pub use pacing::{FramePacing, MAX_FRAME_INTERVAL_MS};
pub use trajectory::{Easing, Trajectory, trajectory};
