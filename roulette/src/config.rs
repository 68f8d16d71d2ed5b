//! Picker configuration.

use std::num::NonZeroUsize;

use roulette_core::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

use crate::wheel::{Easing, FramePacing, MAX_FRAME_INTERVAL_MS, TurnRange};

/// Settings for a [`Picker`](crate::Picker).
///
/// Missing fields fall back to [`Default`] when deserializing, so a JSON
/// document only needs the options it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Number of identifiers in the pool (`1..=capacity`).
    pub capacity: u32,

    /// Where the pointer sits, in degrees clockwise from 3 o'clock.
    ///
    /// 270 is the top of the wheel.
    pub pointer_angle_deg: f64,

    /// Fewest extra full turns per spin.
    pub min_full_turns: u32,

    /// Most extra full turns per spin.
    pub max_full_turns: u32,

    /// Frames per spin animation.
    pub frame_count: usize,

    /// Interval after the first frame, in milliseconds.
    pub frame_interval_ms: u64,

    /// Interval after the last frame, in milliseconds.
    ///
    /// When set, intervals ramp linearly from `frame_interval_ms`.
    pub final_frame_interval_ms: Option<u64>,

    /// Progress curve of the spin.
    pub easing: Easing,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            pointer_angle_deg: 270.0,
            min_full_turns: 3,
            max_full_turns: 5,
            frame_count: 60,
            frame_interval_ms: 50,
            final_frame_interval_ms: None,
            easing: Easing::EaseOutCubic,
        }
    }
}

impl PickerConfig {
    /// Default settings for a pool of `capacity`.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// No spin to speak of: one frame, no extra turns.
    ///
    /// Useful for batch draws and tests.
    pub fn instant(capacity: u32) -> Self {
        Self {
            capacity,
            min_full_turns: 0,
            max_full_turns: 0,
            frame_count: 1,
            frame_interval_ms: 1,
            final_frame_interval_ms: None,
            ..Self::default()
        }
    }

    /// Long dramatic spin whose frames slow down towards the end.
    pub fn slow_reveal(capacity: u32) -> Self {
        Self {
            capacity,
            min_full_turns: 5,
            max_full_turns: 8,
            frame_count: 120,
            frame_interval_ms: 16,
            final_frame_interval_ms: Some(120),
            ..Self::default()
        }
    }

    /// Parse a JSON document and validate it.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the pool capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the pointer angle.
    pub fn with_pointer(mut self, degrees: f64) -> Self {
        self.pointer_angle_deg = degrees;
        self
    }

    /// Set the extra full turns range.
    pub fn with_turns(mut self, min: u32, max: u32) -> Self {
        self.min_full_turns = min;
        self.max_full_turns = max;
        self
    }

    /// Set the frame count.
    pub fn with_frames(mut self, frame_count: usize) -> Self {
        self.frame_count = frame_count;
        self
    }

    /// Set constant frame pacing.
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.frame_interval_ms = interval_ms;
        self.final_frame_interval_ms = None;
        self
    }

    /// Ramp frame pacing from `first_ms` to `last_ms`.
    pub fn with_interval_ramp(mut self, first_ms: u64, last_ms: u64) -> Self {
        self.frame_interval_ms = first_ms;
        self.final_frame_interval_ms = Some(last_ms);
        self
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Check every option, reporting the first problem found.
    pub fn validate(&self) -> ConfigResult<()> {
        crate::pool::validate_capacity(self.capacity)?;
        if !self.pointer_angle_deg.is_finite() {
            return Err(ConfigError::NonFinitePointer(self.pointer_angle_deg));
        }
        self.turns()?;
        self.frames()?;
        check_interval("frame_interval_ms", self.frame_interval_ms)?;
        if let Some(final_ms) = self.final_frame_interval_ms {
            check_interval("final_frame_interval_ms", final_ms)?;
        }
        Ok(())
    }

    /// Extra turn range.
    pub fn turns(&self) -> ConfigResult<TurnRange> {
        TurnRange::new(self.min_full_turns, self.max_full_turns)
    }

    /// Frame count as a non-zero value.
    pub fn frames(&self) -> ConfigResult<NonZeroUsize> {
        NonZeroUsize::new(self.frame_count).ok_or(ConfigError::ZeroFrames)
    }

    /// Frame pacing.
    pub fn pacing(&self) -> FramePacing {
        FramePacing::from_millis(self.frame_interval_ms, self.final_frame_interval_ms)
    }
}

fn check_interval(name: &'static str, interval_ms: u64) -> ConfigResult<()> {
    if (1..=MAX_FRAME_INTERVAL_MS).contains(&interval_ms) {
        Ok(())
    } else {
        Err(ConfigError::InvalidInterval {
            name,
            max: MAX_FRAME_INTERVAL_MS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.pointer_angle_deg, 270.0);
        assert_eq!((config.min_full_turns, config.max_full_turns), (3, 5));
        assert_eq!(config.frame_count, 60);
        assert_eq!(
            config.pacing(),
            FramePacing::Constant(Duration::from_millis(50))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(PickerConfig::instant(1).validate().is_ok());
        assert!(PickerConfig::slow_reveal(50).validate().is_ok());
        assert!(matches!(
            PickerConfig::slow_reveal(50).pacing(),
            FramePacing::Ramp { .. }
        ));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            PickerConfig::new(0).validate(),
            Err(ConfigError::InvalidCapacity { capacity: 0 })
        ));
    }

    #[test]
    fn test_invalid_options() {
        assert!(matches!(
            PickerConfig::new(5).with_turns(4, 2).validate(),
            Err(ConfigError::InvalidTurns { min: 4, max: 2 })
        ));
        assert!(matches!(
            PickerConfig::new(5).with_frames(0).validate(),
            Err(ConfigError::ZeroFrames)
        ));
        assert!(matches!(
            PickerConfig::new(5).with_pointer(f64::NAN).validate(),
            Err(ConfigError::NonFinitePointer(_))
        ));
        assert!(matches!(
            PickerConfig::new(5).with_interval_ms(0).validate(),
            Err(ConfigError::InvalidInterval {
                name: "frame_interval_ms",
                ..
            })
        ));
        assert!(matches!(
            PickerConfig::new(5).with_interval_ramp(10, 0).validate(),
            Err(ConfigError::InvalidInterval {
                name: "final_frame_interval_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_interval_upper_bound() {
        let longest = PickerConfig::new(3).with_interval_ms(MAX_FRAME_INTERVAL_MS);
        assert!(longest.validate().is_ok());

        assert!(matches!(
            PickerConfig::new(3)
                .with_interval_ms(u64::MAX)
                .with_frames(2000)
                .validate(),
            Err(ConfigError::InvalidInterval {
                name: "frame_interval_ms",
                max: MAX_FRAME_INTERVAL_MS,
            })
        ));
        assert!(matches!(
            PickerConfig::new(3)
                .with_interval_ramp(10, MAX_FRAME_INTERVAL_MS + 1)
                .validate(),
            Err(ConfigError::InvalidInterval {
                name: "final_frame_interval_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_partial_json() {
        let config = PickerConfig::from_json_str(r#"{"capacity": 25, "frame_count": 30}"#)
            .expect("valid config");
        assert_eq!(config.capacity, 25);
        assert_eq!(config.frame_count, 30);
        assert_eq!(config.pointer_angle_deg, 270.0);
        assert_eq!(config.easing, Easing::EaseOutCubic);
    }

    #[test]
    fn test_json_rejects_invalid() {
        assert!(matches!(
            PickerConfig::from_json_str(r#"{"capacity": 0}"#),
            Err(ConfigError::InvalidCapacity { .. })
        ));
        assert!(matches!(
            PickerConfig::from_json_str("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_roundtrip_easing_name() {
        let json = serde_json::to_string(&PickerConfig::new(3).with_easing(Easing::Linear))
            .expect("serializable");
        assert!(json.contains(r#""easing":"linear""#));
    }
}
