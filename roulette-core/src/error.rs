//! Error types for the roulette picker.
//!
//! Three failure families exist, each with its own enum so callers can match
//! on exactly what a given operation may return:
//!
//! - [`PoolError`]: user-facing, recoverable (nothing left to draw)
//! - [`AlignmentError`]: caller misuse of the wheel geometry, never retried
//! - [`ConfigError`]: rejected configuration, nothing is applied
//!
//! [`PickerError`] folds all three for APIs that can hit more than one.

use thiserror::Error;

/// Errors raised by draw operations on a pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Every identifier has already been drawn.
    #[error("nothing left to draw: all {capacity} numbers have been drawn")]
    Empty {
        /// Capacity of the exhausted pool.
        capacity: u32,
    },
}

/// Errors raised when wheel geometry is asked about something it cannot map.
///
/// These indicate a programming error in the caller: the target must come
/// from the same pool snapshot that produced the layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignmentError {
    /// A layout was requested for an empty sequence of identifiers.
    #[error("cannot lay out a wheel with no slots")]
    EmptyLayout,

    /// The target identifier has no slot in the supplied layout.
    #[error("identifier {target} has no slot on the wheel ({slots} slots)")]
    UnknownTarget {
        /// Identifier that was looked up.
        target: u32,
        /// Number of slots in the layout.
        slots: usize,
    },

    /// The same identifier appears twice in a layout request.
    #[error("identifier {id} appears more than once in the layout")]
    DuplicateId {
        /// Repeated identifier.
        id: u32,
    },

    /// A trajectory was asked to run backwards.
    #[error("trajectory must move forward: {from} -> {to}")]
    Reversal {
        /// Start angle.
        from: f64,
        /// Requested end angle.
        to: f64,
    },

    /// An interrupted spin reported an angle it never passed through.
    #[error("interrupt angle {angle} outside the last spin [{start}, {settle}]")]
    InterruptOutOfRange {
        /// Reported angle.
        angle: f64,
        /// Start of the last spin.
        start: f64,
        /// Settle angle of the last spin.
        settle: f64,
    },

    /// An angle argument was NaN or infinite.
    #[error("{name} must be a finite angle, got {value}")]
    NonFiniteAngle {
        /// Name of the offending argument.
        name: &'static str,
        /// Value that was supplied.
        value: f64,
    },
}

/// Errors raised while validating or loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Pool capacity must be at least one.
    #[error("capacity must be at least 1, got {capacity}")]
    InvalidCapacity {
        /// Requested capacity.
        capacity: u32,
    },

    /// Pool capacity exceeds the supported maximum.
    #[error("capacity {capacity} exceeds the maximum of {max}")]
    CapacityTooLarge {
        /// Requested capacity.
        capacity: u32,
        /// Largest accepted capacity.
        max: u32,
    },

    /// Minimum full turns is greater than maximum full turns.
    #[error("min_full_turns ({min}) must not exceed max_full_turns ({max})")]
    InvalidTurns {
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },

    /// Maximum full turns exceeds the supported bound.
    #[error("max_full_turns {max} exceeds the limit of {limit}")]
    TooManyTurns {
        /// Configured maximum.
        max: u32,
        /// Largest accepted value.
        limit: u32,
    },

    /// An animation needs at least one frame.
    #[error("frame_count must be at least 1")]
    ZeroFrames,

    /// The pointer angle is NaN or infinite.
    #[error("pointer_angle_deg must be finite, got {0}")]
    NonFinitePointer(f64),

    /// A frame interval outside `1..=max` milliseconds was configured.
    #[error("{name} must be between 1ms and {max}ms")]
    InvalidInterval {
        /// Name of the offending option.
        name: &'static str,
        /// Longest accepted interval, in milliseconds.
        max: u64,
    },

    /// Configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Any error the picker facade can return.
#[derive(Debug, Error)]
pub enum PickerError {
    /// Draw failed.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// Wheel geometry failed.
    #[error(transparent)]
    Alignment(#[from] AlignmentError),

    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;

/// Result alias for wheel geometry.
pub type AlignmentResult<T> = Result<T, AlignmentError>;

/// Result alias for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result alias for the picker facade.
pub type PickerResult<T> = Result<T, PickerError>;
