//! Decelerating rotation trajectories.

use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use roulette_core::{AlignmentError, AlignmentResult};
use serde::{Deserialize, Serialize};

/// Progress curve applied to a trajectory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// `1 - (1 - p)^2`.
    EaseOutQuad,
    /// `1 - (1 - p)^3`: fast start, long settle.
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Map linear progress `p` in `[0, 1]` to eased progress in `[0, 1]`.
    ///
    /// Input outside the unit interval is clamped.
    pub fn apply(self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::EaseOutQuad => p * (2.0 - p),
            Easing::EaseOutCubic => {
                let rest = 1.0 - p;
                1.0 - rest * rest * rest
            }
        }
    }
}

/// Lazy sequence of per-frame rotation angles from `start` to `end`.
///
/// Frame `i` of `n` sits at progress `(i + 1) / n`, so the first frame has
/// already moved and the last frame is exactly `end`. Values never decrease.
#[derive(Debug, Clone)]
pub struct Trajectory {
    start: f64,
    end: f64,
    frame_count: usize,
    next: usize,
    easing: Easing,
}

impl Trajectory {
    /// Build a trajectory with an explicit easing curve.
    pub fn with_easing(
        start: f64,
        end: f64,
        frame_count: NonZeroUsize,
        easing: Easing,
    ) -> AlignmentResult<Self> {
        if !start.is_finite() {
            return Err(AlignmentError::NonFiniteAngle {
                name: "start",
                value: start,
            });
        }
        if !end.is_finite() {
            return Err(AlignmentError::NonFiniteAngle {
                name: "end",
                value: end,
            });
        }
        if end < start {
            return Err(AlignmentError::Reversal {
                from: start,
                to: end,
            });
        }

        Ok(Self {
            start,
            end,
            frame_count: frame_count.get(),
            next: 0,
            easing,
        })
    }

    /// Angle before the first frame.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Angle of the last frame.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Total frames, including those already yielded.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Easing curve in use.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Angle at frame `index` without advancing the iterator.
    pub fn angle_at(&self, index: usize) -> Option<f64> {
        if index >= self.frame_count {
            return None;
        }
        if index + 1 == self.frame_count {
            return Some(self.end);
        }
        let progress = (index + 1) as f64 / self.frame_count as f64;
        let angle = self.start + (self.end - self.start) * self.easing.apply(progress);
        Some(angle.min(self.end))
    }
}

impl Iterator for Trajectory {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let angle = self.angle_at(self.next)?;
        self.next += 1;
        Some(angle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.frame_count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Trajectory {}

impl FusedIterator for Trajectory {}

/// Cubic ease-out trajectory of `frame_count` angles from `current` to `final_angle`.
pub fn trajectory(
    current: f64,
    final_angle: f64,
    frame_count: NonZeroUsize,
) -> AlignmentResult<Trajectory> {
    Trajectory::with_easing(current, final_angle, frame_count, Easing::EaseOutCubic)
}
