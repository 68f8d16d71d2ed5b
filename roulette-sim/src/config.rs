//! Randomized picker configurations for chaos runs.

use roulette::PickerConfig;
use roulette::wheel::Easing;

use crate::sim::{sim_random, sim_random_range};

/// Draw a valid [`PickerConfig`] from the simulation RNG.
///
/// Capacities stay small so pools are exhausted within a run; pointer,
/// turns, frame counts and pacing cover their whole useful range.
pub fn random_config_for_seed() -> PickerConfig {
    let min_full_turns = sim_random_range(0..6);
    let max_full_turns = min_full_turns + sim_random_range(0..4);
    let frame_interval_ms = sim_random_range(1..80);
    let final_frame_interval_ms = if sim_random::<bool>() {
        Some(sim_random_range(1..200))
    } else {
        None
    };
    let easing = match sim_random_range(0..3) {
        0 => Easing::Linear,
        1 => Easing::EaseOutQuad,
        _ => Easing::EaseOutCubic,
    };

    PickerConfig {
        capacity: sim_random_range(1..64),
        pointer_angle_deg: sim_random_range(-720.0..720.0),
        min_full_turns,
        max_full_turns,
        frame_count: sim_random_range(1..120),
        frame_interval_ms,
        final_frame_interval_ms,
        easing,
    }
}
