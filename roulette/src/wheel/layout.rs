//! Slot layout around the wheel.
//!
//! Angles are in degrees, measured clockwise from the geometric zero at
//! 3 o'clock (screen coordinates, y pointing down). In this convention the
//! top of the wheel is 270°.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use roulette_core::{AlignmentError, AlignmentResult};

/// Degrees in one full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Reduce an angle into `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    let angle = degrees.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if angle >= FULL_TURN_DEG {
        0.0
    } else {
        angle
    }
}

/// Evenly spaced slots for an ordered sequence of identifiers.
///
/// Slot `i` of `k` spans `[i * w, (i + 1) * w)` with `w = 360 / k` and is
/// centered at `i * w + w / 2`. The input order is kept as-is, so the same
/// sequence always yields the same angles.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    ids: Vec<u32>,
    index: BTreeMap<u32, usize>,
    slot_width: f64,
}

impl WheelLayout {
    /// Lay out `ids` in the given order.
    pub fn new(ids: &[u32]) -> AlignmentResult<Self> {
        if ids.is_empty() {
            return Err(AlignmentError::EmptyLayout);
        }

        let mut index = BTreeMap::new();
        for (slot, &id) in ids.iter().enumerate() {
            match index.entry(id) {
                Entry::Vacant(entry) => {
                    entry.insert(slot);
                }
                Entry::Occupied(_) => return Err(AlignmentError::DuplicateId { id }),
            }
        }

        Ok(Self {
            ids: ids.to_vec(),
            index,
            slot_width: FULL_TURN_DEG / ids.len() as f64,
        })
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false: a layout has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Angular width of each slot.
    pub fn slot_width(&self) -> f64 {
        self.slot_width
    }

    /// Identifiers in slot order.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Center angle of slot number `slot`.
    pub fn slot_center(&self, slot: usize) -> f64 {
        slot as f64 * self.slot_width + self.slot_width / 2.0
    }

    /// Center angle of `id`'s slot.
    pub fn angle_of(&self, id: u32) -> AlignmentResult<f64> {
        self.index
            .get(&id)
            .map(|&slot| self.slot_center(slot))
            .ok_or(AlignmentError::UnknownTarget {
                target: id,
                slots: self.ids.len(),
            })
    }

    /// `(id, center angle)` for every slot, in slot order.
    pub fn angles(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.ids
            .iter()
            .enumerate()
            .map(|(slot, &id)| (id, self.slot_center(slot)))
    }

    /// The layout as an `id -> angle` map.
    pub fn to_map(&self) -> BTreeMap<u32, f64> {
        self.angles().collect()
    }

    /// Identifier whose slot sits under the pointer after rotating the wheel
    /// clockwise by `rotation` degrees.
    ///
    /// A slot at layout angle `a` is drawn at `a + rotation`, so the pointer
    /// reads layout angle `pointer - rotation`.
    pub fn id_under_pointer(&self, rotation: f64, pointer_deg: f64) -> u32 {
        let local = normalize_angle(pointer_deg - rotation);
        let slot = ((local / self.slot_width) as usize).min(self.ids.len() - 1);
        self.ids[slot]
    }
}

/// Map an ordered sequence of identifiers to slot center angles.
pub fn layout(ids: &[u32]) -> AlignmentResult<WheelLayout> {
    WheelLayout::new(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_slots() {
        let wheel = layout(&[1, 2, 3, 4]).expect("non-empty layout");
        let angles: Vec<f64> = wheel.angles().map(|(_, a)| a).collect();
        assert_eq!(angles, vec![45.0, 135.0, 225.0, 315.0]);
        assert_eq!(wheel.slot_width(), 90.0);
        assert_eq!(wheel.angle_of(3), Ok(225.0));
    }

    #[test]
    fn test_single_slot_covers_wheel() {
        let wheel = layout(&[7]).expect("non-empty layout");
        assert_eq!(wheel.angle_of(7), Ok(180.0));
        for rotation in [0.0, 90.0, 359.0, 1234.5] {
            assert_eq!(wheel.id_under_pointer(rotation, 270.0), 7);
        }
    }

    #[test]
    fn test_layout_keeps_caller_order() {
        let wheel = layout(&[9, 2, 5]).expect("non-empty layout");
        assert_eq!(wheel.ids(), &[9, 2, 5]);
        assert_eq!(wheel.angle_of(9), Ok(60.0));
        assert_eq!(wheel.angle_of(5), Ok(300.0));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let ids = [3, 1, 4, 15, 9, 26];
        assert_eq!(
            layout(&ids).expect("non-empty").to_map(),
            layout(&ids).expect("non-empty").to_map()
        );
    }

    #[test]
    fn test_empty_layout_rejected() {
        assert_eq!(layout(&[]), Err(AlignmentError::EmptyLayout));
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            layout(&[1, 2, 1]),
            Err(AlignmentError::DuplicateId { id: 1 })
        );
    }

    #[test]
    fn test_unknown_target() {
        let wheel = layout(&[1, 2]).expect("non-empty layout");
        assert_eq!(
            wheel.angle_of(5),
            Err(AlignmentError::UnknownTarget {
                target: 5,
                slots: 2
            })
        );
    }

    #[test]
    fn test_id_under_pointer_follows_rotation() {
        let wheel = layout(&[1, 2, 3, 4]).expect("non-empty layout");
        // Unrotated: pointer at 270 reads slot [270, 360) -> id 4.
        assert_eq!(wheel.id_under_pointer(0.0, 270.0), 4);
        // Rotating by 90 brings slot [180, 270) under the pointer.
        assert_eq!(wheel.id_under_pointer(90.0, 270.0), 3);
        // Full turns change nothing.
        assert_eq!(wheel.id_under_pointer(90.0 + 720.0, 270.0), 3);
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(370.0), 10.0);
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(720.0), 0.0);
        assert!(normalize_angle(-1e-20) < FULL_TURN_DEG);
    }
}
