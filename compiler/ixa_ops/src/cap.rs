//! `cap`: intersection of index sets.
//!
//! Results are always canonical: a scalar intersection yields a singleton
//! range or [`LinearRange::EMPTY`]; a range intersection has a positive step
//! (both sides are forced forward unless both are unit ranges); multi indices
//! and regions intersect per dimension into a region.

use ixa_value::{
    integer_overflow, undefined_operation, Canonical, IxResult, LinearRange,
};

use crate::dims::zip_dims;
use crate::direction::forward_range;

const CAP: &str = "cap";

/// `left ∩ right`.
pub fn intersect(left: &Canonical, right: &Canonical) -> IxResult<Canonical> {
    use Canonical::{Multi, Range, Region as Reg, Scalar};
    match (left, right) {
        (Scalar(a), Scalar(b)) => Ok(Range(cap_points(*a, *b))),
        (Scalar(x), Range(r)) | (Range(r), Scalar(x)) => Ok(Range(cap_point_range(*x, *r))),
        (Range(a), Range(b)) => cap_ranges(*a, *b).map(Range),
        (Multi(a), Multi(b)) => zip_dims(CAP, a.components(), b.components(), |a, b| {
            Ok(cap_points(*a, *b))
        })
        .map(Reg),
        (Reg(g), Multi(m)) | (Multi(m), Reg(g)) => {
            zip_dims(CAP, g.ranges(), m.components(), |r, x| Ok(cap_point_range(*x, *r)))
                .map(Reg)
        }
        (Reg(a), Reg(b)) => {
            zip_dims(CAP, a.ranges(), b.ranges(), |a, b| cap_ranges(*a, *b)).map(Reg)
        }
        _ => Err(undefined_operation(CAP, left.form(), Some(right.form()))),
    }
}

fn cap_points(a: i64, b: i64) -> LinearRange {
    if a == b {
        LinearRange::singleton(a)
    } else {
        LinearRange::EMPTY
    }
}

fn cap_point_range(x: i64, r: LinearRange) -> LinearRange {
    if r.contains(x) {
        LinearRange::singleton(x)
    } else {
        LinearRange::EMPTY
    }
}

pub(crate) fn cap_ranges(a: LinearRange, b: LinearRange) -> IxResult<LinearRange> {
    if a.is_unit() && b.is_unit() {
        return Ok(LinearRange::unit(a.first().max(b.first()), a.last().min(b.last())));
    }
    let a = forward_range(a)?;
    let b = forward_range(b)?;
    if a.is_empty() || b.is_empty() {
        return Ok(LinearRange::EMPTY);
    }
    cap_lattice(a, b)
}

/// Intersection of two non-empty ranges with positive steps.
///
/// The common elements satisfy `x ≡ a.first (mod a.step)` and
/// `x ≡ b.first (mod b.step)`. When a solution `x0` exists, they form the
/// lattice `x0 + k·lcm` clipped to the overlap of both bounds. Computed in
/// `i128` so that `lcm` and the intermediate products cannot overflow.
fn cap_lattice(a: LinearRange, b: LinearRange) -> IxResult<LinearRange> {
    let overflow = || integer_overflow(CAP);
    let (f1, s1, l1) = (i128::from(a.first()), i128::from(a.step()), i128::from(a.last()));
    let (f2, s2, l2) = (i128::from(b.first()), i128::from(b.step()), i128::from(b.last()));

    let (g, u, _) = gcdx(s1, s2).ok_or_else(overflow)?;
    let delta = f2.checked_sub(f1).ok_or_else(overflow)?;
    if delta.checked_rem(g).ok_or_else(overflow)? != 0 {
        return Ok(LinearRange::EMPTY);
    }

    // `s1·t ≡ delta (mod s2)`, and `u` inverts `s1/g` modulo `s2/g`.
    let modulus = s2.checked_div(g).ok_or_else(overflow)?;
    let z = delta
        .checked_div(g)
        .and_then(|z| z.checked_rem_euclid(modulus))
        .ok_or_else(overflow)?;
    let t = z
        .checked_mul(u)
        .and_then(|t| t.checked_rem_euclid(modulus))
        .ok_or_else(overflow)?;
    let base = s1
        .checked_mul(t)
        .and_then(|x| x.checked_add(f1))
        .ok_or_else(overflow)?;
    let lcm = s1
        .checked_div(g)
        .and_then(|x| x.checked_mul(s2))
        .ok_or_else(overflow)?;

    let lo = |f: i128| {
        base.checked_sub(f)
            .and_then(|d| d.checked_rem_euclid(lcm))
            .and_then(|d| f.checked_add(d))
    };
    let hi = |l: i128| {
        l.checked_sub(base)
            .and_then(|d| d.checked_rem_euclid(lcm))
            .and_then(|d| l.checked_sub(d))
    };
    let first = lo(f1).zip(lo(f2)).map(|(x, y)| x.max(y)).ok_or_else(overflow)?;
    let last = hi(l1).zip(hi(l2)).map(|(x, y)| x.min(y)).ok_or_else(overflow)?;
    if first > last {
        return Ok(LinearRange::EMPTY);
    }

    // Both bounds lie inside the input ranges, so they fit in i64.
    let first = i64::try_from(first).map_err(|_| overflow())?;
    let last = i64::try_from(last).map_err(|_| overflow())?;
    match i64::try_from(lcm) {
        Ok(step) => LinearRange::new(first, step, last),
        Err(_) if first == last => Ok(LinearRange::singleton(first)),
        Err(_) => Err(overflow()),
    }
}

/// Extended Euclid: `(g, u, v)` with `a·u + b·v = g = gcd(a, b)`.
fn gcdx(a: i128, b: i128) -> Option<(i128, i128, i128)> {
    let (mut old_r, mut r) = (a, b);
    let (mut old_u, mut u) = (1i128, 0i128);
    let (mut old_v, mut v) = (0i128, 1i128);
    while r != 0 {
        let q = old_r.checked_div(r)?;
        (old_r, r) = (r, old_r.checked_sub(q.checked_mul(r)?)?);
        (old_u, u) = (u, old_u.checked_sub(q.checked_mul(u)?)?);
        (old_v, v) = (v, old_v.checked_sub(q.checked_mul(v)?)?);
    }
    Some((old_r, old_u, old_v))
}
