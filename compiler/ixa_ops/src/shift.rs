//! `plus` and `minus`: shifting by scalars and multi indices.
//!
//! | left | right | result |
//! |---|---|---|
//! | scalar | scalar | scalar |
//! | scalar | range, range | scalar | range with the range's step |
//! | multi | multi | multi |
//! | region | multi, multi | region | region |
//!
//! Every other pair is undefined. `minus(scalar, range)` mirrors the range
//! around the scalar: a unit range stays increasing, any other step is
//! negated.

use ixa_value::checked;
use ixa_value::{undefined_operation, Canonical, IxResult, LinearRange, MultiIndex, Region};

use crate::dims::zip_dims;

const PLUS: &str = "plus";
const MINUS: &str = "minus";

/// `left + right`.
pub fn add(left: &Canonical, right: &Canonical) -> IxResult<Canonical> {
    use Canonical::{Multi, Range, Region as Reg, Scalar};
    match (left, right) {
        (Scalar(a), Scalar(b)) => checked::add(*a, *b, PLUS).map(Scalar),
        (Scalar(x), Range(r)) | (Range(r), Scalar(x)) => shift_range(*r, *x).map(Range),
        (Multi(a), Multi(b)) => zip_dims(PLUS, a.components(), b.components(), |a, b| {
            checked::add(*a, *b, PLUS)
        })
        .map(Multi),
        (Reg(g), Multi(m)) | (Multi(m), Reg(g)) => {
            zip_dims(PLUS, g.ranges(), m.components(), |r, x| shift_range(*r, *x)).map(Reg)
        }
        _ => Err(undefined_operation(PLUS, left.form(), Some(right.form()))),
    }
}

/// `left - right`.
pub fn sub(left: &Canonical, right: &Canonical) -> IxResult<Canonical> {
    use Canonical::{Multi, Range, Region as Reg, Scalar};
    match (left, right) {
        (Scalar(a), Scalar(b)) => checked::sub(*a, *b, MINUS).map(Scalar),
        (Range(r), Scalar(x)) => unshift_range(*r, *x).map(Range),
        (Scalar(x), Range(r)) => mirror_range(*x, *r).map(Range),
        (Multi(a), Multi(b)) => zip_dims(MINUS, a.components(), b.components(), |a, b| {
            checked::sub(*a, *b, MINUS)
        })
        .map(Multi),
        (Reg(g), Multi(m)) => {
            zip_dims(MINUS, g.ranges(), m.components(), |r, x| unshift_range(*r, *x)).map(Reg)
        }
        (Multi(m), Reg(g)) => {
            zip_dims(MINUS, m.components(), g.ranges(), |x, r| mirror_range(*x, *r)).map(Reg)
        }
        _ => Err(undefined_operation(MINUS, left.form(), Some(right.form()))),
    }
}

/// Unary `-x`.
pub fn negate(value: &Canonical) -> IxResult<Canonical> {
    match value {
        Canonical::Scalar(x) => checked::neg(*x, MINUS).map(Canonical::Scalar),
        Canonical::Range(r) => mirror_range(0, *r).map(Canonical::Range),
        Canonical::Multi(m) => m
            .iter()
            .map(|x| checked::neg(x, MINUS))
            .collect::<IxResult<MultiIndex>>()
            .map(Canonical::Multi),
        Canonical::Region(g) => g
            .ranges()
            .iter()
            .map(|r| mirror_range(0, *r))
            .collect::<IxResult<Region>>()
            .map(Canonical::Region),
    }
}

fn shift_range(r: LinearRange, x: i64) -> IxResult<LinearRange> {
    if r.is_empty() {
        return Ok(r);
    }
    LinearRange::new(
        checked::add(r.first(), x, PLUS)?,
        r.step(),
        checked::add(r.last(), x, PLUS)?,
    )
}

fn unshift_range(r: LinearRange, x: i64) -> IxResult<LinearRange> {
    if r.is_empty() {
        return Ok(r);
    }
    LinearRange::new(
        checked::sub(r.first(), x, MINUS)?,
        r.step(),
        checked::sub(r.last(), x, MINUS)?,
    )
}

/// `x - r`, elementwise.
fn mirror_range(x: i64, r: LinearRange) -> IxResult<LinearRange> {
    // Both empty constants mirror to a positive step.
    if r.is_empty() {
        return Ok(LinearRange::EMPTY);
    }
    let from_first = checked::sub(x, r.first(), MINUS)?;
    let from_last = checked::sub(x, r.last(), MINUS)?;
    if r.is_unit() {
        Ok(LinearRange::unit(from_last, from_first))
    } else {
        LinearRange::new(from_first, checked::neg(r.step(), MINUS)?, from_last)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
