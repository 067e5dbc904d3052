//! Multi-dimensional points.

use std::fmt;

use smallvec::SmallVec;

/// A point in N-dimensional integer space.
///
/// Components are stored inline for up to four dimensions, so the common
/// 2-D and 3-D cases never touch the heap.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiIndex(SmallVec<[i64; 4]>);

impl MultiIndex {
    pub fn new(components: impl IntoIterator<Item = i64>) -> Self {
        MultiIndex(components.into_iter().collect())
    }

    /// Number of dimensions.
    #[inline]
    pub fn dims(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn components(&self) -> &[i64] {
        &self.0
    }

    #[inline]
    pub fn get(&self, dim: usize) -> Option<i64> {
        self.0.get(dim).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }
}

impl<const N: usize> From<[i64; N]> for MultiIndex {
    fn from(components: [i64; N]) -> Self {
        MultiIndex::new(components)
    }
}

impl FromIterator<i64> for MultiIndex {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        MultiIndex::new(iter)
    }
}

impl fmt::Display for MultiIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for MultiIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MultiIndex{self}")
    }
}
