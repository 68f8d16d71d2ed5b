//! Errors surfaced by simulated runs.

use roulette_core::{PickerError, TimeError};
use thiserror::Error;

/// Why a simulated run failed.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// An invariant rejected the state after an operation.
    #[error("invariant '{invariant}' violated (seed {seed}): {message}")]
    InvariantViolation {
        /// Name of the invariant.
        invariant: String,
        /// Seed of the run.
        seed: u64,
        /// What the invariant reported.
        message: String,
    },

    /// The picker returned an error the workload did not expect.
    #[error("picker error: {0}")]
    Picker(#[from] PickerError),

    /// Playback could not sleep.
    #[error("time error: {0}")]
    Time(#[from] TimeError),

    /// The picker accepted something it should have refused.
    #[error("unexpected behavior: {0}")]
    Unexpected(String),
}

/// Result alias for simulated runs.
pub type SimulationResult<T> = Result<T, SimulationError>;
