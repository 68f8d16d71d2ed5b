//! Trait-based invariant system for simulation testing.
//!
//! Invariants are checked after every operation a workload performs. A
//! violation is reported as an error carrying a description, and the
//! runner records the seed that produced it.

use super::view::PickerView;

/// A named property that must hold after every picker operation.
///
/// # Example
///
/// ```ignore
/// struct CapacityNeverZero;
///
/// impl Invariant for CapacityNeverZero {
///     fn name(&self) -> &str { "capacity_never_zero" }
///     fn check(&self, view: &PickerView, _sim_time: u64) -> Result<(), String> {
///         if view.after.capacity == 0 {
///             return Err("capacity dropped to zero".into());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Invariant {
    /// The human-readable name of this invariant.
    fn name(&self) -> &str;

    /// Check this invariant against the state around one operation.
    ///
    /// `sim_time` is the logical time in milliseconds.
    fn check(&self, view: &PickerView, sim_time: u64) -> Result<(), String>;
}

/// Create a boxed invariant from a name and closure.
///
/// # Example
///
/// ```ignore
/// let inv = invariant_fn("history_bounded", |view, _time| {
///     if view.after.drawn.len() > view.after.capacity as usize {
///         return Err("history longer than pool".into());
///     }
///     Ok(())
/// });
/// ```
pub fn invariant_fn<F>(name: impl Into<String>, check: F) -> Box<dyn Invariant>
where
    F: Fn(&PickerView, u64) -> Result<(), String> + 'static,
{
    Box::new(FnInvariant {
        name: name.into(),
        check,
    })
}

struct FnInvariant<F> {
    name: String,
    check: F,
}

impl<F> Invariant for FnInvariant<F>
where
    F: Fn(&PickerView, u64) -> Result<(), String>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, view: &PickerView, sim_time: u64) -> Result<(), String> {
        (self.check)(view, sim_time)
    }
}
