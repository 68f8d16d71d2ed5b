//! Exclusion draw pool.
//!
//! A [`DrawPool`] holds the identifiers `1..=capacity`, split between the ones
//! still in play and the ordered history of those already drawn. Every public
//! operation leaves the pool satisfying:
//!
//! - `remaining_count() + drawn_count() == capacity()`
//! - no identifier is both remaining and drawn
//! - together they cover exactly `1..=capacity`
//!
//! Remaining identifiers are kept in an unordered `Vec` so a draw is one
//! uniform index plus a `swap_remove`. Storage order never biases selection
//! because the index is uniform over whatever order the vector happens to be
//! in. Snapshots handed out to callers are sorted copies.

use std::collections::BTreeSet;

use roulette_core::{ConfigError, ConfigResult, PoolError, PoolResult, RandomProvider};
use serde::{Deserialize, Serialize};

/// Largest pool the engine accepts.
pub const MAX_CAPACITY: u32 = 1_000_000;

/// Lifecycle state of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolState {
    /// At least one identifier can still be drawn.
    Active,
    /// Every identifier has been drawn; only `configure`/`reset` leave this state.
    Exhausted,
}

/// Draw-without-replacement state for identifiers `1..=capacity`.
#[derive(Debug, Clone)]
pub struct DrawPool {
    capacity: u32,
    remaining: Vec<u32>,
    drawn: Vec<u32>,
}

impl DrawPool {
    /// Create a full pool of `capacity` identifiers.
    pub fn new(capacity: u32) -> ConfigResult<Self> {
        validate_capacity(capacity)?;
        Ok(Self {
            capacity,
            remaining: (1..=capacity).collect(),
            drawn: Vec::new(),
        })
    }

    /// Replace the pool with a fresh one of `capacity` identifiers.
    ///
    /// History is always cleared: a new participant count invalidates any
    /// in-progress ordering. On error nothing changes.
    pub fn configure(&mut self, capacity: u32) -> ConfigResult<()> {
        validate_capacity(capacity)?;

        if !self.drawn.is_empty() {
            if capacity != self.capacity {
                tracing::warn!(
                    old_capacity = self.capacity,
                    new_capacity = capacity,
                    discarded = self.drawn.len(),
                    "capacity changed, discarding draw history"
                );
            } else {
                tracing::debug!(
                    capacity,
                    discarded = self.drawn.len(),
                    "reconfigured with same capacity, clearing history"
                );
            }
        }

        self.capacity = capacity;
        self.refill();
        tracing::info!(capacity, "pool configured");
        Ok(())
    }

    /// Put every identifier back, keeping the current capacity.
    pub fn reset(&mut self) {
        tracing::info!(
            capacity = self.capacity,
            discarded = self.drawn.len(),
            "pool reset"
        );
        self.refill();
    }

    fn refill(&mut self) {
        self.remaining.clear();
        self.remaining.extend(1..=self.capacity);
        self.drawn.clear();
    }

    /// Draw one identifier uniformly from those remaining.
    ///
    /// Fails with [`PoolError::Empty`] once exhausted, leaving state untouched.
    pub fn draw<R: RandomProvider>(&mut self, random: &R) -> PoolResult<u32> {
        if self.remaining.is_empty() {
            tracing::warn!(capacity = self.capacity, "draw requested on exhausted pool");
            return Err(PoolError::Empty {
                capacity: self.capacity,
            });
        }

        let index = random.random_range(0..self.remaining.len());
        let picked = self.remaining.swap_remove(index);
        self.drawn.push(picked);

        tracing::debug!(
            picked,
            rank = self.drawn.len(),
            remaining = self.remaining.len(),
            "drew identifier"
        );
        Ok(picked)
    }

    /// Pick a provisional identifier without removing it.
    ///
    /// Used for the teaser highlights flashed while the wheel spins. Returns
    /// `None` when nothing remains.
    pub fn peek_random<R: RandomProvider>(&self, random: &R) -> Option<u32> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = random.random_range(0..self.remaining.len());
        Some(self.remaining[index])
    }

    /// Total number of identifiers in play.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of identifiers not yet drawn.
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Number of identifiers drawn so far.
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PoolState {
        if self.remaining.is_empty() {
            PoolState::Exhausted
        } else {
            PoolState::Active
        }
    }

    /// True once every identifier has been drawn.
    pub fn is_exhausted(&self) -> bool {
        self.state() == PoolState::Exhausted
    }

    /// Whether `id` is still in play.
    pub fn contains(&self, id: u32) -> bool {
        self.remaining.contains(&id)
    }

    /// Copy of the remaining identifiers.
    pub fn remaining_ids(&self) -> BTreeSet<u32> {
        self.remaining.iter().copied().collect()
    }

    /// Remaining identifiers in ascending order.
    ///
    /// This is the order the wheel lays slots out in.
    pub fn remaining_sorted(&self) -> Vec<u32> {
        let mut ids = self.remaining.clone();
        ids.sort_unstable();
        ids
    }

    /// Copy of the draw history, oldest first.
    pub fn drawn_ids(&self) -> Vec<u32> {
        self.drawn.clone()
    }

    /// Most recently drawn identifier.
    pub fn last_drawn(&self) -> Option<u32> {
        self.drawn.last().copied()
    }

    /// Fraction of the pool already drawn, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.drawn.len() as f64 / self.capacity as f64
    }

    /// Draw history as `(rank, id)` pairs, rank starting at 1.
    pub fn draw_order(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.drawn
            .iter()
            .enumerate()
            .map(|(index, &id)| (index + 1, id))
    }

    /// Serializable copy of the whole pool.
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            capacity: self.capacity,
            remaining: self.remaining_sorted(),
            drawn: self.drawn_ids(),
            state: self.state(),
        }
    }
}

pub(crate) fn validate_capacity(capacity: u32) -> ConfigResult<()> {
    if capacity < 1 {
        return Err(ConfigError::InvalidCapacity { capacity });
    }
    if capacity > MAX_CAPACITY {
        return Err(ConfigError::CapacityTooLarge {
            capacity,
            max: MAX_CAPACITY,
        });
    }
    Ok(())
}

/// Point-in-time copy of a pool for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Total identifiers in play.
    pub capacity: u32,
    /// Remaining identifiers, ascending.
    pub remaining: Vec<u32>,
    /// Draw history, oldest first.
    pub drawn: Vec<u32>,
    /// Lifecycle state at snapshot time.
    pub state: PoolState,
}
