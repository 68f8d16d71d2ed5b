//! Draw plus wheel alignment in one owned object.
//!
//! A [`Picker`] owns the pool, the wheel rotation and the randomness source.
//! Each [`Picker::spin`] draws one identifier and plans the animation that
//! lands it under the pointer; the host renders the returned [`Spin`].

use std::time::Duration;

use roulette_core::{AlignmentError, ConfigResult, PickerResult, PoolError, RandomProvider};
use serde::{Deserialize, Serialize};

use crate::config::PickerConfig;
use crate::pool::DrawPool;
use crate::wheel::{
    FramePacing, Trajectory, TurnRange, WheelLayout, normalize_angle, target_rotation,
};

/// Cumulative wheel rotation in degrees.
///
/// Never reduced modulo 360, so successive spins always move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    /// Current rotation.
    pub current_angle_deg: f64,
}

impl RotationState {
    /// Rotation starting at `angle`.
    pub fn new(angle: f64) -> Self {
        Self {
            current_angle_deg: angle,
        }
    }

    /// Current rotation.
    pub fn angle(&self) -> f64 {
        self.current_angle_deg
    }

    /// Current rotation reduced into `[0, 360)`.
    pub fn normalized(&self) -> f64 {
        normalize_angle(self.current_angle_deg)
    }
}

/// One animation frame ready to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Zero-based frame number.
    pub index: usize,
    /// Wheel rotation for this frame.
    pub angle: f64,
    /// Identifier whose slot is under the pointer at `angle`.
    pub highlighted: u32,
    /// How long to show this frame.
    pub delay: Duration,
}

/// A planned spin: the drawn identifier and how to animate it.
#[derive(Debug, Clone)]
pub struct Spin {
    /// Identifier drawn by this spin.
    pub drawn: u32,
    /// Position in the draw order, starting at 1.
    pub rank: usize,
    /// Wheel as it looked before the draw.
    pub layout: WheelLayout,
    /// Pointer position used for alignment.
    pub pointer_angle_deg: f64,
    /// Rotation when the spin started.
    pub start_angle: f64,
    /// Rotation when the spin settles.
    pub settle_angle: f64,
    /// Per-frame rotations.
    pub frames: Trajectory,
    /// Per-frame timing.
    pub pacing: FramePacing,
}

impl Spin {
    /// Number of frames in the animation.
    pub fn frame_count(&self) -> usize {
        self.frames.frame_count()
    }

    /// Frames with the slot under the pointer and the delay after each.
    pub fn frames_with_highlight(&self) -> impl Iterator<Item = Frame> + '_ {
        let frame_count = self.frame_count();
        self.frames.clone().enumerate().map(move |(index, angle)| Frame {
            index,
            angle,
            highlighted: self.layout.id_under_pointer(angle, self.pointer_angle_deg),
            delay: self.pacing.interval(index, frame_count),
        })
    }

    /// Identifier under the pointer once the wheel settles.
    pub fn settled_on(&self) -> u32 {
        self.layout
            .id_under_pointer(self.settle_angle, self.pointer_angle_deg)
    }

    /// Total animation time.
    pub fn duration(&self) -> Duration {
        self.pacing.total(self.frame_count())
    }
}

/// Draw-without-replacement picker driving a wheel.
pub struct Picker<R: RandomProvider> {
    config: PickerConfig,
    turns: TurnRange,
    pool: DrawPool,
    rotation: RotationState,
    /// Angles `interrupt_at` may still accept: `[start, settle]` of the
    /// latest spin, collapsed to a single angle once interrupted.
    last_window: (f64, f64),
    random: R,
}

impl<R: RandomProvider> Picker<R> {
    /// Validate `config` and build a full pool from it.
    pub fn new(config: PickerConfig, random: R) -> ConfigResult<Self> {
        config.validate()?;
        let turns = config.turns()?;
        let pool = DrawPool::new(config.capacity)?;
        Ok(Self {
            config,
            turns,
            pool,
            rotation: RotationState::default(),
            last_window: (0.0, 0.0),
            random,
        })
    }

    /// Replace the pool with `capacity` fresh identifiers.
    ///
    /// The wheel keeps its rotation. On error nothing changes.
    pub fn configure(&mut self, capacity: u32) -> ConfigResult<()> {
        self.pool.configure(capacity)?;
        self.config.capacity = capacity;
        self.collapse_window();
        Ok(())
    }

    /// Put every identifier back.
    pub fn reset(&mut self) {
        self.pool.reset();
        self.collapse_window();
    }

    fn collapse_window(&mut self) {
        let angle = self.rotation.angle();
        self.last_window = (angle, angle);
    }

    /// Active configuration.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Underlying pool.
    pub fn pool(&self) -> &DrawPool {
        &self.pool
    }

    /// Wheel rotation.
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Randomness source.
    pub fn random(&self) -> &R {
        &self.random
    }

    /// Draw one identifier and plan the spin that reveals it.
    ///
    /// The wheel shows the remaining identifiers, ascending, as they were
    /// before this draw. The rotation advances to the settle angle. An
    /// exhausted pool returns [`PoolError::Empty`](roulette_core::PoolError)
    /// and changes nothing.
    pub fn spin(&mut self) -> PickerResult<Spin> {
        let frame_count = self.config.frames()?;
        let ids = self.pool.remaining_sorted();
        if ids.is_empty() {
            tracing::warn!(capacity = self.pool.capacity(), "spin requested on exhausted pool");
            return Err(PoolError::Empty {
                capacity: self.pool.capacity(),
            }
            .into());
        }
        let layout = WheelLayout::new(&ids)?;

        // Past this point the only failures are a target missing from the
        // layout or a backwards trajectory, and the draw rules out both.
        let drawn = self.pool.draw(&self.random)?;

        let start_angle = self.rotation.angle();
        let pointer = self.config.pointer_angle_deg;
        let settle_angle =
            target_rotation(&layout, drawn, pointer, start_angle, self.turns, &self.random)?;
        let frames = Trajectory::with_easing(
            start_angle,
            settle_angle,
            frame_count,
            self.config.easing,
        )?;

        self.rotation = RotationState::new(settle_angle);
        self.last_window = (start_angle, settle_angle);

        let rank = self.pool.drawn_count();
        tracing::debug!(drawn, rank, start_angle, settle_angle, "planned spin");

        Ok(Spin {
            drawn,
            rank,
            layout,
            pointer_angle_deg: pointer,
            start_angle,
            settle_angle,
            frames,
            pacing: self.config.pacing(),
        })
    }

    /// Record that the host stopped the last animation at `angle`.
    ///
    /// The next spin starts from there. `angle` must lie within the last
    /// spin's `[start, settle]`; after an interrupt only that same angle is
    /// accepted again, so the wheel never rewinds. The drawn identifier
    /// stays drawn.
    pub fn interrupt_at(&mut self, angle: f64) -> PickerResult<()> {
        let (start, settle) = self.last_window;
        if !angle.is_finite() {
            return Err(AlignmentError::NonFiniteAngle {
                name: "angle",
                value: angle,
            }
            .into());
        }
        if angle < start || angle > settle {
            return Err(AlignmentError::InterruptOutOfRange {
                angle,
                start,
                settle,
            }
            .into());
        }

        tracing::debug!(angle, settle, "spin interrupted");
        self.rotation = RotationState::new(angle);
        self.collapse_window();
        Ok(())
    }

    /// Up to `count` provisional identifiers for teaser highlights.
    ///
    /// Nothing is removed; repeats are possible. Empty when exhausted.
    pub fn teasers(&self, count: usize) -> Vec<u32> {
        (0..count)
            .filter_map(|_| self.pool.peek_random(&self.random))
            .collect()
    }
}
