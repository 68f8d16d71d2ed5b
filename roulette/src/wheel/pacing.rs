//! Per-frame timing for a trajectory.

use std::time::Duration;

/// Longest accepted frame interval, in milliseconds.
pub const MAX_FRAME_INTERVAL_MS: u64 = 60_000;

/// How long each animation frame is shown.
///
/// A ramp grows (or shrinks) the interval linearly from the first frame to
/// the last, which stretches the settle on top of the easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePacing {
    /// Every frame lasts the same time.
    Constant(Duration),
    /// Linear interpolation between two intervals.
    Ramp {
        /// Interval after the first frame.
        first: Duration,
        /// Interval after the last frame.
        last: Duration,
    },
}

impl FramePacing {
    /// Pacing from millisecond settings; `final_ms` switches to a ramp.
    pub fn from_millis(interval_ms: u64, final_ms: Option<u64>) -> Self {
        let first = Duration::from_millis(interval_ms);
        match final_ms {
            Some(last_ms) if last_ms != interval_ms => FramePacing::Ramp {
                first,
                last: Duration::from_millis(last_ms),
            },
            _ => FramePacing::Constant(first),
        }
    }

    /// Interval to wait after frame `index` of `frame_count`.
    pub fn interval(&self, index: usize, frame_count: usize) -> Duration {
        match *self {
            FramePacing::Constant(interval) => interval,
            FramePacing::Ramp { first, last } => {
                if frame_count <= 1 {
                    return last;
                }
                let step = index.min(frame_count - 1) as i128;
                let steps = (frame_count - 1) as i128;
                let first_ns = first.as_nanos() as i128;
                let last_ns = last.as_nanos() as i128;
                let ns = first_ns + (last_ns - first_ns) * step / steps;
                Duration::from_nanos(u64::try_from(ns.max(0)).unwrap_or(u64::MAX))
            }
        }
    }

    /// Total time for `frame_count` frames, saturating at [`Duration::MAX`].
    pub fn total(&self, frame_count: usize) -> Duration {
        (0..frame_count).fold(Duration::ZERO, |total, i| {
            total.saturating_add(self.interval(i, frame_count))
        })
    }
}

impl Default for FramePacing {
    fn default() -> Self {
        FramePacing::Constant(Duration::from_millis(50))
    }
}
