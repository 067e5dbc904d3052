//! `forward` and `backward`: fix the sign of every step.
//!
//! Scalars and multi indices have no direction and pass through. Ranges are
//! reversed when their step has the wrong sign; regions are fixed per
//! dimension. The point set never changes.

use ixa_value::{Canonical, IxResult, LinearRange, Region};

/// Equivalent value whose steps are all positive.
pub fn to_forward(value: &Canonical) -> IxResult<Canonical> {
    match value {
        Canonical::Scalar(_) | Canonical::Multi(_) => Ok(value.clone()),
        Canonical::Range(r) => forward_range(*r).map(Canonical::Range),
        // Unit regions are the common case and already forward.
        Canonical::Region(g) if g.is_unit() => Ok(value.clone()),
        Canonical::Region(g) => map_region(g, forward_range).map(Canonical::Region),
    }
}

/// Equivalent value whose steps are all negative.
pub fn to_backward(value: &Canonical) -> IxResult<Canonical> {
    match value {
        Canonical::Scalar(_) | Canonical::Multi(_) => Ok(value.clone()),
        Canonical::Range(r) => backward_range(*r).map(Canonical::Range),
        Canonical::Region(g) => map_region(g, backward_range).map(Canonical::Region),
    }
}

pub(crate) fn forward_range(r: LinearRange) -> IxResult<LinearRange> {
    if r.step() < 0 {
        r.reversed()
    } else {
        Ok(r)
    }
}

pub(crate) fn backward_range(r: LinearRange) -> IxResult<LinearRange> {
    if r.step() > 0 {
        r.reversed()
    } else {
        Ok(r)
    }
}

fn map_region(
    g: &Region,
    f: impl Fn(LinearRange) -> IxResult<LinearRange>,
) -> IxResult<Region> {
    g.ranges().iter().map(|r| f(*r)).collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
