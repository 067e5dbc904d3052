//! Rectangular regions: one linear range per dimension.

use std::fmt;

use smallvec::SmallVec;

use crate::{LinearRange, MultiIndex};

/// The Cartesian product of N linear ranges.
///
/// A region is empty as soon as one of its dimensions is empty; the other
/// dimensions keep their ranges so callers can see which axis collapsed.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region(SmallVec<[LinearRange; 4]>);

impl Region {
    pub fn new(ranges: impl IntoIterator<Item = LinearRange>) -> Self {
        Region(ranges.into_iter().collect())
    }

    /// Number of dimensions.
    #[inline]
    pub fn dims(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn ranges(&self) -> &[LinearRange] {
        &self.0
    }

    #[inline]
    pub fn get(&self, dim: usize) -> Option<LinearRange> {
        self.0.get(dim).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().any(LinearRange::is_empty)
    }

    /// Whether every dimension has step `1`.
    pub fn is_unit(&self) -> bool {
        self.0.iter().all(LinearRange::is_unit)
    }

    /// Number of points, saturating at `u128::MAX`.
    pub fn len(&self) -> u128 {
        self.0
            .iter()
            .fold(1u128, |acc, r| acc.saturating_mul(r.len()))
    }

    pub fn contains(&self, point: &MultiIndex) -> bool {
        point.dims() == self.dims()
            && self
                .0
                .iter()
                .zip(point.iter())
                .all(|(range, x)| range.contains(x))
    }
}

impl FromIterator<LinearRange> for Region {
    fn from_iter<I: IntoIterator<Item = LinearRange>>(iter: I) -> Self {
        Region::new(iter)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, r) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{r}")?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Region{self}")
    }
}

#[cfg(test)]
mod tests;
