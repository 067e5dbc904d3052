//! The closed sum of the four canonical forms.

use std::fmt;

use crate::{LinearRange, MultiIndex, Region};

/// A normalized index-like value.
///
/// Operators match on pairs of `Canonical` exhaustively; new input types are
/// supported by normalizing into one of these variants, never by adding one.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Canonical {
    Scalar(i64),
    Range(LinearRange),
    Multi(MultiIndex),
    Region(Region),
}

impl Canonical {
    /// The shape of this value, used in dispatch errors.
    pub const fn form(&self) -> Form {
        match self {
            Canonical::Scalar(_) => Form::Scalar,
            Canonical::Range(_) => Form::Range,
            Canonical::Multi(_) => Form::Multi,
            Canonical::Region(_) => Form::Region,
        }
    }

    pub const fn as_scalar(&self) -> Option<i64> {
        match self {
            Canonical::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    pub const fn as_range(&self) -> Option<&LinearRange> {
        match self {
            Canonical::Range(r) => Some(r),
            _ => None,
        }
    }

    pub const fn as_multi(&self) -> Option<&MultiIndex> {
        match self {
            Canonical::Multi(m) => Some(m),
            _ => None,
        }
    }

    pub const fn as_region(&self) -> Option<&Region> {
        match self {
            Canonical::Region(g) => Some(g),
            _ => None,
        }
    }

    /// Dimensionality of multi indices and regions.
    pub fn dims(&self) -> Option<usize> {
        match self {
            Canonical::Multi(m) => Some(m.dims()),
            Canonical::Region(g) => Some(g.dims()),
            Canonical::Scalar(_) | Canonical::Range(_) => None,
        }
    }
}

impl From<i64> for Canonical {
    fn from(x: i64) -> Self {
        Canonical::Scalar(x)
    }
}

impl From<LinearRange> for Canonical {
    fn from(r: LinearRange) -> Self {
        Canonical::Range(r)
    }
}

impl From<MultiIndex> for Canonical {
    fn from(m: MultiIndex) -> Self {
        Canonical::Multi(m)
    }
}

impl From<Region> for Canonical {
    fn from(g: Region) -> Self {
        Canonical::Region(g)
    }
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Canonical::Scalar(x) => write!(f, "{x}"),
            Canonical::Range(r) => write!(f, "{r}"),
            Canonical::Multi(m) => write!(f, "{m}"),
            Canonical::Region(g) => write!(f, "{g}"),
        }
    }
}

impl fmt::Debug for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Canonical::Scalar(x) => write!(f, "Scalar({x})"),
            Canonical::Range(r) => write!(f, "{r:?}"),
            Canonical::Multi(m) => write!(f, "{m:?}"),
            Canonical::Region(g) => write!(f, "{g:?}"),
        }
    }
}

/// Shape tag of a [`Canonical`] value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Form {
    Scalar,
    Range,
    Multi,
    Region,
}

impl Form {
    pub const fn name(self) -> &'static str {
        match self {
            Form::Scalar => "scalar index",
            Form::Range => "linear range",
            Form::Multi => "multi index",
            Form::Region => "region",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
