//! Linear ranges: `first:step:last` over `i64`.

use std::fmt;

use crate::errors::{integer_overflow, zero_step, IxResult};

/// An arithmetic sequence of indices.
///
/// Construction keeps two invariants that the operators rely on:
///
/// - `step != 0`;
/// - `last` is the final element actually reached from `first`, so
///   `1:3:11` is stored as `1:3:10`.
///
/// Empty ranges collapse to [`LinearRange::EMPTY`] (`1:0`) when the step is
/// positive and to [`LinearRange::EMPTY_REVERSED`] (`0:-1:1`) when it is
/// negative. Equality compares the stored triple.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RangeParts", into = "RangeParts")
)]
pub struct LinearRange {
    first: i64,
    step: i64,
    last: i64,
}

impl LinearRange {
    /// The canonical empty range, `1:0`.
    pub const EMPTY: LinearRange = LinearRange {
        first: 1,
        step: 1,
        last: 0,
    };

    /// The canonical empty range with a negative step, `0:-1:1`.
    pub const EMPTY_REVERSED: LinearRange = LinearRange {
        first: 0,
        step: -1,
        last: 1,
    };

    /// Build `first:step:last`, aligning `last` onto the step.
    ///
    /// A step of `i64::MIN` is rejected with `IntegerOverflow`: its
    /// reversal is not representable, and `forward`/`backward` must not fail
    /// on a value that constructed successfully.
    pub fn new(first: i64, step: i64, last: i64) -> IxResult<Self> {
        if step == 0 {
            return Err(zero_step());
        }
        if step == i64::MIN {
            return Err(integer_overflow("range step"));
        }
        Ok(Self::aligned(first, step, last))
    }

    /// Build the unit range `first:last`.
    pub fn unit(first: i64, last: i64) -> Self {
        Self::aligned(first, 1, last)
    }

    /// Build `x:x`.
    pub const fn singleton(x: i64) -> Self {
        LinearRange {
            first: x,
            step: 1,
            last: x,
        }
    }

    fn aligned(first: i64, step: i64, last: i64) -> Self {
        let stride = step.unsigned_abs();
        if step > 0 {
            if last < first {
                return Self::EMPTY;
            }
            // `last - (last - first) % step`, the distance fits in u64.
            let overshoot = last.abs_diff(first).checked_rem(stride).unwrap_or(0);
            LinearRange {
                first,
                step,
                last: last.wrapping_sub_unsigned(overshoot),
            }
        } else {
            if last > first {
                return Self::EMPTY_REVERSED;
            }
            let overshoot = first.abs_diff(last).checked_rem(stride).unwrap_or(0);
            LinearRange {
                first,
                step,
                last: last.wrapping_add_unsigned(overshoot),
            }
        }
    }

    #[inline]
    pub const fn first(&self) -> i64 {
        self.first
    }

    #[inline]
    pub const fn step(&self) -> i64 {
        self.step
    }

    #[inline]
    pub const fn last(&self) -> i64 {
        self.last
    }

    /// Whether the step is exactly `1`.
    #[inline]
    pub const fn is_unit(&self) -> bool {
        self.step == 1
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        if self.step > 0 {
            self.last < self.first
        } else {
            self.last > self.first
        }
    }

    /// Number of elements.
    ///
    /// `u128` because `i64::MIN:i64::MAX` holds 2^64 elements.
    pub fn len(&self) -> u128 {
        if self.is_empty() {
            return 0;
        }
        let span = self
            .last
            .abs_diff(self.first)
            .checked_div(self.step.unsigned_abs())
            .unwrap_or(0);
        u128::from(span).saturating_add(1)
    }

    /// Smallest element, `None` when empty.
    pub fn min(&self) -> Option<i64> {
        match (self.is_empty(), self.step > 0) {
            (true, _) => None,
            (false, true) => Some(self.first),
            (false, false) => Some(self.last),
        }
    }

    /// Largest element, `None` when empty.
    pub fn max(&self) -> Option<i64> {
        match (self.is_empty(), self.step > 0) {
            (true, _) => None,
            (false, true) => Some(self.last),
            (false, false) => Some(self.first),
        }
    }

    /// Membership test in O(1).
    pub fn contains(&self, x: i64) -> bool {
        match (self.min(), self.max()) {
            (Some(lo), Some(hi)) if lo <= x && x <= hi => {
                x.abs_diff(self.first).checked_rem(self.step.unsigned_abs()) == Some(0)
            }
            _ => false,
        }
    }

    /// The same elements in the opposite order.
    ///
    /// Empty ranges flip between the two empty constants. Construction
    /// rules out a step of `i64::MIN`, so this does not fail in practice.
    pub fn reversed(&self) -> IxResult<Self> {
        if self.is_empty() {
            return Ok(if self.step > 0 {
                Self::EMPTY_REVERSED
            } else {
                Self::EMPTY
            });
        }
        let step = self
            .step
            .checked_neg()
            .ok_or_else(|| integer_overflow("range reversal"))?;
        Ok(LinearRange {
            first: self.last,
            step,
            last: self.first,
        })
    }

    /// Iterate the elements without allocating.
    pub fn iter(&self) -> LinearRangeIter {
        LinearRangeIter {
            next: self.first,
            step: self.step,
            remaining: self.len(),
        }
    }
}

impl IntoIterator for LinearRange {
    type Item = i64;
    type IntoIter = LinearRangeIter;

    fn into_iter(self) -> LinearRangeIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`LinearRange`].
#[derive(Clone, Debug)]
pub struct LinearRangeIter {
    next: i64,
    step: i64,
    remaining: u128,
}

impl Iterator for LinearRangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            // The next element exists inside the range, so this cannot wrap.
            self.next = self.next.wrapping_add(self.step);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl fmt::Display for LinearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step == 1 {
            write!(f, "{}:{}", self.first, self.last)
        } else {
            write!(f, "{}:{}:{}", self.first, self.step, self.last)
        }
    }
}

impl fmt::Debug for LinearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearRange({self})")
    }
}

/// Unvalidated triple used to deserialize through [`LinearRange::new`].
#[cfg(feature = "serde")]
#[derive(Copy, Clone, serde::Serialize, serde::Deserialize)]
struct RangeParts {
    first: i64,
    step: i64,
    last: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeParts> for LinearRange {
    type Error = crate::IxError;

    fn try_from(parts: RangeParts) -> Result<Self, crate::IxError> {
        LinearRange::new(parts.first, parts.step, parts.last)
    }
}

#[cfg(feature = "serde")]
impl From<LinearRange> for RangeParts {
    fn from(range: LinearRange) -> Self {
        RangeParts {
            first: range.first,
            step: range.step,
            last: range.last,
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
