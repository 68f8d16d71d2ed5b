//! Simulation implementations of the provider traits.

mod random;
mod time;

pub use random::SimRandomProvider;
pub use time::SimTimeProvider;
