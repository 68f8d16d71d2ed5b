//! Trajectory shape over arbitrary spans.

use std::num::NonZeroUsize;

use proptest::prelude::*;
use roulette::wheel::{Easing, Trajectory, trajectory};

proptest! {
    #[test]
    fn length_endpoint_monotonic(
        start in -10_000.0f64..10_000.0,
        span in 0.0f64..20_000.0,
        frames in 1usize..240,
    ) {
        let end = start + span;
        let count = NonZeroUsize::new(frames).expect("non-zero");
        let path: Vec<f64> = trajectory(start, end, count).expect("forward").collect();

        prop_assert_eq!(path.len(), frames);
        prop_assert_eq!(path.last().copied(), Some(end));
        for pair in path.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        for angle in &path {
            prop_assert!(*angle >= start && *angle <= end);
        }
        if frames > 1 && span >= 1.0 {
            prop_assert!(path[0] > start);
            prop_assert!(path[0] < end);
        }
    }

    #[test]
    fn every_easing_ends_on_target(
        span in 0.0f64..5_000.0,
        frames in 1usize..100,
        easing in prop_oneof![
            Just(Easing::Linear),
            Just(Easing::EaseOutQuad),
            Just(Easing::EaseOutCubic),
        ],
    ) {
        let count = NonZeroUsize::new(frames).expect("non-zero");
        let path = Trajectory::with_easing(0.0, span, count, easing).expect("forward");
        prop_assert_eq!(path.last(), Some(span));
    }
}

#[test]
fn cubic_decelerates() {
    let count = NonZeroUsize::new(10).expect("non-zero");
    let path: Vec<f64> = trajectory(0.0, 1000.0, count).expect("forward").collect();
    let steps: Vec<f64> = std::iter::once(path[0])
        .chain(path.windows(2).map(|pair| pair[1] - pair[0]))
        .collect();
    for pair in steps.windows(2) {
        assert!(pair[0] >= pair[1], "step grew: {} -> {}", pair[0], pair[1]);
    }
}
