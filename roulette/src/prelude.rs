//! Common imports for driving a picker.

pub use crate::config::PickerConfig;
pub use crate::picker::{Frame, Picker, RotationState, Spin};
pub use crate::playback::{Flow, FrameSink, PlaybackOutcome, play};
pub use crate::pool::{DrawPool, PoolSnapshot, PoolState};
pub use crate::wheel::{Easing, FramePacing, Trajectory, TurnRange, WheelLayout};

pub use roulette_core::{
    PickerError, PoolError, RandomProvider, ThreadRandomProvider, TimeProvider,
    TokioTimeProvider,
};

pub use std::time::Duration;

/// Result type for picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;
