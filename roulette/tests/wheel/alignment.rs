//! Settle angles always land the target under the pointer.

use proptest::prelude::*;
use roulette::SeededRandomProvider;
use roulette::wheel::{FULL_TURN_DEG, TurnRange, layout, normalize_angle, target_rotation};

fn aligned(settle: f64, slot_angle: f64, pointer: f64) -> bool {
    let diff = normalize_angle(settle + slot_angle - pointer);
    diff < 1e-6 || FULL_TURN_DEG - diff < 1e-6
}

#[test]
fn four_slot_layout() {
    let wheel = layout(&[1, 2, 3, 4]).expect("non-empty layout");
    let angles: Vec<(u32, f64)> = wheel.angles().collect();
    assert_eq!(
        angles,
        vec![(1, 45.0), (2, 135.0), (3, 225.0), (4, 315.0)]
    );
}

#[test]
fn current_ten_three_turns_pointer_top() {
    // 18 slots of 20 degrees: id 10 is centered at 190, id 11 at 210.
    let ids: Vec<u32> = (1..=18).collect();
    let wheel = layout(&ids).expect("non-empty layout");
    let turns = TurnRange::new(3, 3).expect("valid range");
    let random = SeededRandomProvider::new(1);

    for target in [10, 11] {
        let slot = wheel.angle_of(target).expect("slot exists");
        let settle = target_rotation(&wheel, target, 270.0, 10.0, turns, &random)
            .expect("target on wheel");
        assert!(settle >= 10.0 + 3.0 * 360.0);
        assert!(aligned(settle, slot, 270.0));
        assert_eq!(wheel.id_under_pointer(settle, 270.0), target);
    }
}

proptest! {
    #[test]
    fn settle_is_forward_and_aligned(
        slots in 1u32..60,
        pick in any::<prop::sample::Index>(),
        pointer in -720.0f64..720.0,
        current in -5000.0f64..50_000.0,
        min in 0u32..6,
        spread in 0u32..4,
        seed in any::<u64>(),
    ) {
        let ids: Vec<u32> = (1..=slots).collect();
        let wheel = layout(&ids).expect("non-empty layout");
        let target = ids[pick.index(ids.len())];
        let turns = TurnRange::new(min, min + spread).expect("valid range");
        let random = SeededRandomProvider::new(seed);

        let settle = target_rotation(&wheel, target, pointer, current, turns, &random)
            .expect("target on wheel");
        let slot = wheel.angle_of(target).expect("slot exists");

        prop_assert!(settle > current);
        prop_assert!(settle - current >= f64::from(min) * FULL_TURN_DEG);
        prop_assert!(settle - current <= f64::from(min + spread + 1) * FULL_TURN_DEG + 1e-6);
        prop_assert!(aligned(settle, slot, pointer));
        prop_assert_eq!(wheel.id_under_pointer(settle, pointer), target);
    }
}
