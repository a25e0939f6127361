use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound::Excluded;

use rust_decimal::Decimal;

use crate::segment::breakpoint::Breakpoint;
use crate::segment::stepfunction::{
    Intensity,
    Position,
    StepFunction
};

/// Supported exact-comparison instantiations.
pub type IntSegmentMap = SegmentMap<i64, i64>;
pub type DecimalSegmentMap = SegmentMap<Decimal, Decimal>;

/// Piecewise-constant function over an ordered axis, stored as its change
/// points. Each entry `(position, intensity)` means the function holds
/// `intensity` from `position` up to the next stored position; before the
/// first entry (and for the empty map) the function is zero.
///
/// After every mutation no two consecutive entries carry the same intensity,
/// so every stored position is a genuine change point and the empty map is
/// the canonical all-zero state.
pub struct SegmentMap<P, I> {
    breakpoints: BTreeMap<P, I>,
}

impl<P, I> SegmentMap<P, I>
where
    P: Position,
    I: Intensity,
{
    pub fn new() -> SegmentMap<P, I> {
        SegmentMap { breakpoints: BTreeMap::new() }
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    // ─────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────

    /// Adds `amount` to the function on `[from, to)`. Values outside the
    /// range are untouched. Empty ranges (`from >= to`) and a zero `amount`
    /// are no-ops.
    pub fn add(&mut self, from: P, to: P, amount: I) {
        if from >= to || amount.is_zero() {
            return;
        }
        let start_value = self.value(from);
        let end_value = self.value(to);

        // Boundary at `from`: whether the key already existed or not, the
        // function's value there becomes its old value plus `amount`.
        self.breakpoints.insert(from, start_value + amount);

        // Interior change points keep their positions, only their values
        // shift with the range.
        for (_, intensity) in self.breakpoints.range_mut((Excluded(from), Excluded(to))) {
            *intensity = *intensity + amount;
        }

        // Boundary at `to`: the value from `to` onward is unaffected, so an
        // existing key stays as is and a missing one materializes the
        // pre-update value (zero when nothing was stored there yet).
        self.breakpoints.entry(to).or_insert(end_value);

        self.coalesce_span(from, to);
    }

    /// Forces the function to the constant `amount` on `[from, to)`,
    /// discarding whatever structure existed inside the range. Values
    /// outside are untouched. Empty ranges are no-ops, as is a zero
    /// `amount` on an empty map.
    pub fn set(&mut self, from: P, to: P, amount: I) {
        if from >= to {
            return;
        }
        if self.breakpoints.is_empty() && amount.is_zero() {
            return;
        }
        let end_value = self.value(to);

        let superseded: Vec<P> = self
            .breakpoints
            .range(from..to)
            .map(|(&position, _)| position)
            .collect();
        for position in superseded {
            self.breakpoints.remove(&position);
        }

        // The left boundary goes in unconditionally; if the preceding run
        // already carried `amount` the coalesce pass removes it again.
        self.breakpoints.insert(from, amount);
        self.breakpoints.entry(to).or_insert(end_value);

        self.coalesce_span(from, to);
    }

    /// Removes every breakpoint in `[from, to]` whose intensity equals the
    /// one in effect immediately before it. Both operations only insert keys
    /// and change values inside that window, and the no-adjacent-duplicate
    /// invariant held everywhere before the call, so scanning the window
    /// seeded with the predecessor's intensity is enough.
    fn coalesce_span(&mut self, from: P, to: P) {
        let mut previous = self
            .breakpoints
            .range(..from)
            .next_back()
            .map(|(_, &intensity)| intensity)
            .unwrap_or_else(I::zero);
        let redundant: Vec<P> = self
            .breakpoints
            .range(from..=to)
            .filter_map(|(&position, &intensity)| {
                if intensity == previous {
                    Some(position)
                } else {
                    previous = intensity;
                    None
                }
            })
            .collect();
        for position in redundant {
            self.breakpoints.remove(&position);
        }
    }

    // ─────────────────────────────────────────────
    // Observation
    // ─────────────────────────────────────────────

    /// The stored breakpoints in ascending position order. Minimal by
    /// construction: ascending unique positions, no adjacent duplicate
    /// intensities, empty for the all-zero function.
    pub fn to_canonical_form(&self) -> Vec<Breakpoint<P, I>> {
        self.breakpoints
            .iter()
            .map(|(&position, &intensity)| Breakpoint::new(position, intensity))
            .collect()
    }
}

impl<P, I> StepFunction<P, I> for SegmentMap<P, I>
where
    P: Position,
    I: Intensity,
{
    fn value(&self, x: P) -> I {
        self.breakpoints
            .range(..=x)
            .next_back()
            .map(|(_, &intensity)| intensity)
            .unwrap_or_else(I::zero)
    }

    fn first_position(&self) -> Option<P> {
        self.breakpoints.keys().next().copied()
    }

    fn last_position(&self) -> Option<P> {
        self.breakpoints.keys().next_back().copied()
    }
}

impl<P, I> fmt::Display for SegmentMap<P, I>
where
    P: fmt::Display,
    I: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (position, intensity)) in self.breakpoints.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "[{},{}]", position, intensity)?;
        }
        write!(f, "]")
    }
}
