//! # roulette-core
//!
//! Core abstractions shared by the roulette crates.
//!
//! - **Provider traits**: [`RandomProvider`] and [`TimeProvider`] let the
//!   picker run against real randomness and wall-clock pacing in production,
//!   and against seeded randomness and a logical clock in simulation.
//! - **Errors**: [`PoolError`], [`AlignmentError`], [`ConfigError`] and the
//!   aggregate [`PickerError`].

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

mod error;
mod random;
mod time;

// Error exports
pub use error::{
    AlignmentError, AlignmentResult, ConfigError, ConfigResult, PickerError, PickerResult,
    PoolError, PoolResult,
};

// Provider trait exports
pub use random::{RandomProvider, SeededRandomProvider, ThreadRandomProvider};
pub use time::{TimeError, TimeProvider, TokioTimeProvider};
