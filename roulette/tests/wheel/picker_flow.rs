//! A full session through the picker facade.

use std::collections::BTreeSet;

use roulette::prelude::*;
use roulette::SeededRandomProvider;

#[test]
fn full_session_draws_everyone_once() {
    let mut picker =
        Picker::new(PickerConfig::new(15), SeededRandomProvider::new(2024)).expect("valid config");
    let mut seen = BTreeSet::new();
    let mut previous_settle = picker.rotation().angle();

    while !picker.pool().is_exhausted() {
        let spin = picker.spin().expect("pool not exhausted");
        assert!(seen.insert(spin.drawn), "{} drawn twice", spin.drawn);
        assert_eq!(spin.rank, seen.len());
        assert_eq!(spin.settled_on(), spin.drawn);
        assert!(spin.start_angle == previous_settle);
        assert!(spin.settle_angle - spin.start_angle >= 3.0 * 360.0);
        previous_settle = spin.settle_angle;
    }

    assert_eq!(seen, (1..=15).collect());
    assert_eq!(picker.pool().progress(), 1.0);
    assert!(matches!(
        picker.spin(),
        Err(PickerError::Pool(PoolError::Empty { capacity: 15 }))
    ));
}

#[test]
fn reset_starts_a_new_round_from_current_rotation() {
    let mut picker =
        Picker::new(PickerConfig::instant(3), SeededRandomProvider::new(8)).expect("valid config");
    while picker.spin().is_ok() {}
    let rotation = picker.rotation();

    picker.reset();
    assert_eq!(picker.pool().remaining_count(), 3);
    let spin = picker.spin().expect("pool refilled");
    assert_eq!(spin.start_angle, rotation.angle());
    assert_eq!(spin.layout.ids(), &[1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn interrupted_playback_resumes_from_observed_angle() {
    let mut picker =
        Picker::new(PickerConfig::new(9), SeededRandomProvider::new(77)).expect("valid config");
    let time = TokioTimeProvider::new();
    let spin = picker.spin().expect("pool not exhausted");

    let mut sink = |frame: &Frame| {
        if frame.index == 12 {
            Flow::Stop
        } else {
            Flow::Continue
        }
    };
    let outcome = play(&spin, &time, &mut sink).await.expect("sleep never fails");
    assert!(!outcome.completed);

    picker
        .interrupt_at(outcome.last_angle)
        .expect("observed angle lies within the spin");
    let next = picker.spin().expect("pool not exhausted");
    assert_eq!(next.start_angle, outcome.last_angle);
    assert_eq!(next.settled_on(), next.drawn);
    assert_ne!(next.drawn, spin.drawn);
}
