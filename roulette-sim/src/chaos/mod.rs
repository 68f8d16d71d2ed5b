//! Invariants checked while simulated workloads drive a picker.

pub mod invariant_trait;
pub mod invariants;
mod view;

pub use invariant_trait::{Invariant, invariant_fn};
pub use invariants::{
    DrawFromRemaining, PoolConservation, RefillIsComplete, RefusalIsNoop, SpinLandsOnDrawn,
    SpinMovesForward, TeasersFromRemaining, default_invariants,
};
pub use view::{OpOutcome, PickerOp, PickerView, SpinRecord};
