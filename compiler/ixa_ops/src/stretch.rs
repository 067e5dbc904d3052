//! `stretch` (`±`) and `shrink` (`∓`): symmetric growth of index sets.
//!
//! The amount is a scalar, or a multi index giving one amount per dimension.
//! A range keeps its step, so for non-unit steps the amount must be a
//! multiple of the step.

use ixa_value::checked;
use ixa_value::{
    invalid_shrink_amount, invalid_stretch_amount, shrink_of_point, undefined_operation,
    Canonical, IxResult, LinearRange, Region,
};

use crate::dims::zip_dims;

const STRETCH: &str = "stretch";
const SHRINK: &str = "shrink";

/// `target ± amount`.
///
/// Ranges move their bounds outward by `amount`. This is bound arithmetic,
/// not set arithmetic: the empty range `1:0` stretched by 2 is `-1:2`.
pub fn stretch(target: &Canonical, amount: &Canonical) -> IxResult<Canonical> {
    use Canonical::{Multi, Range, Region as Reg, Scalar};
    match (target, amount) {
        (Scalar(x), Scalar(k)) => stretch_point(*x, *k).map(Range),
        (Range(r), Scalar(k)) => stretch_range(*r, *k).map(Range),
        (Multi(m), Scalar(k)) => m
            .iter()
            .map(|x| stretch_point(x, *k))
            .collect::<IxResult<Region>>()
            .map(Reg),
        (Multi(m), Multi(k)) => {
            zip_dims(STRETCH, m.components(), k.components(), |x, k| stretch_point(*x, *k))
                .map(Reg)
        }
        (Reg(g), Scalar(k)) => g
            .ranges()
            .iter()
            .map(|r| stretch_range(*r, *k))
            .collect::<IxResult<Region>>()
            .map(Reg),
        (Reg(g), Multi(k)) => {
            zip_dims(STRETCH, g.ranges(), k.components(), |r, k| stretch_range(*r, *k))
                .map(Reg)
        }
        _ => Err(undefined_operation(STRETCH, target.form(), Some(amount.form()))),
    }
}

/// `target ∓ amount`.
pub fn shrink(target: &Canonical, amount: &Canonical) -> IxResult<Canonical> {
    use Canonical::{Multi, Range, Region as Reg, Scalar};
    match (target, amount) {
        (Range(r), Scalar(k)) => shrink_range(*r, *k).map(Range),
        (Reg(g), Scalar(k)) => g
            .ranges()
            .iter()
            .map(|r| shrink_range(*r, *k))
            .collect::<IxResult<Region>>()
            .map(Reg),
        (Reg(g), Multi(k)) => {
            zip_dims(SHRINK, g.ranges(), k.components(), |r, k| shrink_range(*r, *k))
                .map(Reg)
        }
        (Scalar(_) | Multi(_), Scalar(_) | Multi(_)) => {
            Err(shrink_of_point(target.form(), amount.form()))
        }
        _ => Err(undefined_operation(SHRINK, target.form(), Some(amount.form()))),
    }
}

fn stretch_point(x: i64, k: i64) -> IxResult<LinearRange> {
    Ok(LinearRange::unit(
        checked::sub(x, k, STRETCH)?,
        checked::add(x, k, STRETCH)?,
    ))
}

fn stretch_range(r: LinearRange, k: i64) -> IxResult<LinearRange> {
    if !r.is_unit() && r.step() != -1 && !checked::is_multiple_of(k, r.step()) {
        return Err(invalid_stretch_amount(k, r.step()));
    }
    let (first, last) = if r.step() > 0 {
        (checked::sub(r.first(), k, STRETCH)?, checked::add(r.last(), k, STRETCH)?)
    } else {
        (checked::add(r.first(), k, STRETCH)?, checked::sub(r.last(), k, STRETCH)?)
    };
    LinearRange::new(first, r.step(), last)
}

fn shrink_range(r: LinearRange, k: i64) -> IxResult<LinearRange> {
    if !r.is_unit() && r.step() != -1 && !checked::is_multiple_of(k, r.step()) {
        return Err(invalid_shrink_amount(k, r.step()));
    }
    let (first, last) = if r.step() > 0 {
        (checked::add(r.first(), k, SHRINK)?, checked::sub(r.last(), k, SHRINK)?)
    } else {
        (checked::sub(r.first(), k, SHRINK)?, checked::add(r.last(), k, SHRINK)?)
    };
    LinearRange::new(first, r.step(), last)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
