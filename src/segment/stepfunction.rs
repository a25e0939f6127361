use num_traits::Zero;

/// Axis coordinate of a breakpoint. Anything totally ordered and cheap to
/// copy qualifies.
pub trait Position: Copy + Ord {}

impl<T> Position for T where T: Copy + Ord {}

/// Additive value carried by a segment. `Eq` (rather than `PartialEq`) is
/// deliberate: merging relies on exact equality, so binary floating point
/// is excluded at the type level. Use `rust_decimal::Decimal` for
/// non-integer intensities.
pub trait Intensity: Copy + Eq + Zero {}

impl<T> Intensity for T where T: Copy + Eq + Zero {}

pub trait StepFunction<P, I> {
    /// Value of the function at `x`: the intensity of the greatest stored
    /// position ≤ `x`, or zero when no position precedes `x`.
    fn value(&self, x: P) -> I;

    fn first_position(&self) -> Option<P>;

    fn last_position(&self) -> Option<P>;
}
