//! Checked `i64` arithmetic that reports overflow as [`IxError`].
//!
//! Each helper names the user-level operation so the message points at the
//! operator that overflowed (`integer overflow in plus`).

use crate::errors::{division_by_zero, integer_overflow, IxResult};

#[inline]
pub fn add(a: i64, b: i64, operation: &'static str) -> IxResult<i64> {
    a.checked_add(b).ok_or_else(|| integer_overflow(operation))
}

#[inline]
pub fn sub(a: i64, b: i64, operation: &'static str) -> IxResult<i64> {
    a.checked_sub(b).ok_or_else(|| integer_overflow(operation))
}

#[inline]
pub fn mul(a: i64, b: i64, operation: &'static str) -> IxResult<i64> {
    a.checked_mul(b).ok_or_else(|| integer_overflow(operation))
}

#[inline]
pub fn neg(a: i64, operation: &'static str) -> IxResult<i64> {
    a.checked_neg().ok_or_else(|| integer_overflow(operation))
}

/// Truncating division.
#[inline]
pub fn div(a: i64, b: i64, operation: &'static str) -> IxResult<i64> {
    if b == 0 {
        return Err(division_by_zero());
    }
    a.checked_div(b).ok_or_else(|| integer_overflow(operation))
}

/// Remainder with the sign of the dividend.
#[inline]
pub fn rem(a: i64, b: i64, operation: &'static str) -> IxResult<i64> {
    if b == 0 {
        return Err(division_by_zero());
    }
    a.checked_rem(b).ok_or_else(|| integer_overflow(operation))
}

/// Whether `amount` is an exact multiple of `step`. A zero step divides
/// nothing.
#[inline]
pub fn is_multiple_of(amount: i64, step: i64) -> bool {
    amount.unsigned_abs().checked_rem(step.unsigned_abs()) == Some(0)
}
