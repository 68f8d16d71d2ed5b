//! Logical clock for simulated playback.

use async_trait::async_trait;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use roulette_core::{TimeError, TimeProvider};

/// Time provider whose `sleep` advances a logical clock and returns at once.
///
/// Clones share the clock.
#[derive(Debug, Clone, Default)]
pub struct SimTimeProvider {
    now: Rc<Cell<Duration>>,
}

impl SimTimeProvider {
    /// Clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward without sleeping.
    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get().saturating_add(duration));
    }
}

#[async_trait(?Send)]
impl TimeProvider for SimTimeProvider {
    async fn sleep(&self, duration: Duration) -> Result<(), TimeError> {
        self.advance(duration);
        Ok(())
    }

    fn now(&self) -> Duration {
        self.now.get()
    }
}
