//! Compile-time [`Normalize`] rules.

use std::any::type_name;
use std::fmt;
use std::ops::{Range, RangeInclusive};

use ixa_value::{
    index_out_of_range, integer_overflow, unsupported_type, Canonical, IxResult, LinearRange,
    MultiIndex, Region,
};

use crate::{Normalize, StepRange};

/// Primitive integer types that can be narrowed to an `i64` index.
pub trait IndexInt: Copy + PartialOrd + fmt::Display + 'static {
    /// Narrow to `i64`, failing with `IndexOutOfRange`.
    fn to_index(self) -> IxResult<i64>;

    /// `self - 1`, `None` at the type's minimum.
    fn predecessor(self) -> Option<Self>;
}

macro_rules! index_int {
    ($($t:ty),* $(,)?) => {$(
        impl IndexInt for $t {
            #[inline]
            fn to_index(self) -> IxResult<i64> {
                i64::try_from(self).map_err(|_| index_out_of_range(self, stringify!($t)))
            }

            #[inline]
            fn predecessor(self) -> Option<Self> {
                self.checked_sub(1)
            }
        }

        impl Normalize for $t {
            #[inline]
            fn normalize(&self) -> IxResult<Canonical> {
                self.to_index().map(Canonical::Scalar)
            }
        }
    )*};
}

index_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Ranges

impl<T: IndexInt> Normalize for Range<T> {
    fn normalize(&self) -> IxResult<Canonical> {
        if self.start >= self.end {
            return Ok(Canonical::Range(LinearRange::EMPTY));
        }
        let last = self
            .end
            .predecessor()
            .ok_or_else(|| integer_overflow("normalize"))?;
        Ok(Canonical::Range(LinearRange::unit(
            self.start.to_index()?,
            last.to_index()?,
        )))
    }
}

impl<T: IndexInt> Normalize for RangeInclusive<T> {
    fn normalize(&self) -> IxResult<Canonical> {
        if self.is_empty() {
            return Ok(Canonical::Range(LinearRange::EMPTY));
        }
        Ok(Canonical::Range(LinearRange::unit(
            self.start().to_index()?,
            self.end().to_index()?,
        )))
    }
}

impl<T: IndexInt> Normalize for StepRange<T> {
    fn normalize(&self) -> IxResult<Canonical> {
        let range = LinearRange::new(
            self.first.to_index()?,
            self.step.to_index()?,
            self.last.to_index()?,
        )?;
        Ok(Canonical::Range(range))
    }
}

// Already canonical

impl Normalize for LinearRange {
    #[inline]
    fn normalize(&self) -> IxResult<Canonical> {
        Ok(Canonical::Range(*self))
    }
}

impl Normalize for MultiIndex {
    #[inline]
    fn normalize(&self) -> IxResult<Canonical> {
        Ok(Canonical::Multi(self.clone()))
    }
}

impl Normalize for Region {
    #[inline]
    fn normalize(&self) -> IxResult<Canonical> {
        Ok(Canonical::Region(self.clone()))
    }
}

impl Normalize for Canonical {
    #[inline]
    fn normalize(&self) -> IxResult<Canonical> {
        Ok(self.clone())
    }
}

impl<T: Normalize + ?Sized> Normalize for &T {
    #[inline]
    fn normalize(&self) -> IxResult<Canonical> {
        (**self).normalize()
    }
}

// Collections

/// Collect normalized components into a multi index (all scalars) or a
/// region (all ranges).
///
/// `type_name` is reported when the components mix shapes or contain a
/// multi-dimensional value.
pub fn from_components<I>(type_name: &str, components: I) -> IxResult<Canonical>
where
    I: IntoIterator<Item = IxResult<Canonical>>,
{
    let components = components.into_iter().collect::<IxResult<Vec<_>>>()?;
    if components.iter().all(|c| matches!(c, Canonical::Scalar(_))) {
        return Ok(Canonical::Multi(
            components.iter().filter_map(Canonical::as_scalar).collect(),
        ));
    }
    if components.iter().all(|c| matches!(c, Canonical::Range(_))) {
        return Ok(Canonical::Region(
            components.iter().filter_map(Canonical::as_range).copied().collect(),
        ));
    }
    tracing::debug!(type_name, "components mix scalars and ranges");
    Err(unsupported_type(type_name))
}

impl<T: Normalize, const N: usize> Normalize for [T; N] {
    fn normalize(&self) -> IxResult<Canonical> {
        from_components(type_name::<Self>(), self.iter().map(Normalize::normalize))
    }
}

impl<T: Normalize> Normalize for [T] {
    fn normalize(&self) -> IxResult<Canonical> {
        from_components(type_name::<Self>(), self.iter().map(Normalize::normalize))
    }
}

impl<T: Normalize> Normalize for Vec<T> {
    fn normalize(&self) -> IxResult<Canonical> {
        self.as_slice().normalize()
    }
}

macro_rules! tuple_normalize {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: Normalize),+> Normalize for ($($name,)+) {
            fn normalize(&self) -> IxResult<Canonical> {
                from_components(type_name::<Self>(), [$(self.$idx.normalize()),+])
            }
        }
    };
}

tuple_normalize!(A 0);
tuple_normalize!(A 0, B 1);
tuple_normalize!(A 0, B 1, C 2);
tuple_normalize!(A 0, B 1, C 2, D 3);
tuple_normalize!(A 0, B 1, C 2, D 3, E 4);
tuple_normalize!(A 0, B 1, C 2, D 3, E 4, F 5);

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
