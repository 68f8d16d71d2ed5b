//! # Roulette
//!
//! Draw-without-replacement picker with a wheel that lands on each pick.
//!
//! ## Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              roulette (this crate)                          │
//! │   DrawPool • wheel geometry • Picker • paced playback       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  roulette-sim (dev)                                         │
//! │   Seeded RNG • logical clock • invariants • chaos runs      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     roulette-core                           │
//! │  Provider traits: Random, Time                              │
//! │  Errors: PoolError, AlignmentError, ConfigError             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use roulette::{Picker, PickerConfig, ThreadRandomProvider};
//!
//! let mut picker = Picker::new(PickerConfig::new(10), ThreadRandomProvider::new())?;
//! let spin = picker.spin()?;
//! for angle in spin.frames.clone() {
//!     // rotate the wheel to `angle`
//! }
//! println!("drew {}", spin.drawn);
//! ```
//!
//! ## Angle Convention
//!
//! Degrees, clockwise from 3 o'clock as on screen. The default pointer sits at
//! the top of the wheel, 270°. Rotations are cumulative and never wrapped.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub use roulette_core::*;

pub mod config;
pub mod picker;
pub mod playback;
pub mod pool;
pub mod prelude;
pub mod wheel;

pub use config::PickerConfig;
pub use picker::{Frame, Picker, RotationState, Spin};
pub use playback::{Flow, FrameSink, PlaybackOutcome, play};
pub use pool::{DrawPool, MAX_CAPACITY, PoolSnapshot, PoolState};
