#![deny(clippy::arithmetic_side_effects)]
//! Ixa Ops - direction fixing and the arithmetic operators.
//!
//! Each operator is a total function over canonical forms: it returns a new
//! canonical value or an error explaining which combination of shapes has no
//! rule. The generic functions below accept anything that implements
//! [`Normalize`] and normalize every operand before dispatching:
//!
//! ```
//! use ixa_normalize::StepRange;
//!
//! let r = ixa_ops::cap(ixa_ops::forward(StepRange::new(11, -3, -2))?, StepRange::new(1, 2, 12))?;
//! assert_eq!(r.to_string(), "5:6:11");
//! # Ok::<(), ixa_value::IxError>(())
//! ```

mod cap;
mod dims;
mod direction;
mod op;
mod shift;
mod stretch;

use ixa_normalize::Normalize;
use ixa_value::{Canonical, IxResult};

pub use direction::{to_backward, to_forward};
pub use op::Op;

/// `a + b`.
pub fn plus(a: impl Normalize, b: impl Normalize) -> IxResult<Canonical> {
    Op::Plus.apply_binary(&a.normalize()?, &b.normalize()?)
}

/// `a - b`.
pub fn minus(a: impl Normalize, b: impl Normalize) -> IxResult<Canonical> {
    Op::Minus.apply_binary(&a.normalize()?, &b.normalize()?)
}

/// `a ∩ b`.
pub fn cap(a: impl Normalize, b: impl Normalize) -> IxResult<Canonical> {
    Op::Cap.apply_binary(&a.normalize()?, &b.normalize()?)
}

/// `a ± k`. Stretching an empty range applies to its bounds, so
/// `stretch(1:0, 2)` is `-1:2`.
pub fn stretch(a: impl Normalize, k: impl Normalize) -> IxResult<Canonical> {
    Op::Stretch.apply_binary(&a.normalize()?, &k.normalize()?)
}

/// `a ∓ k`.
pub fn shrink(a: impl Normalize, k: impl Normalize) -> IxResult<Canonical> {
    Op::Shrink.apply_binary(&a.normalize()?, &k.normalize()?)
}

/// Unary `+a`: the normalized value.
pub fn pos(a: impl Normalize) -> IxResult<Canonical> {
    Op::Plus.apply_unary(&a.normalize()?)
}

/// Unary `-a`.
pub fn neg(a: impl Normalize) -> IxResult<Canonical> {
    Op::Minus.apply_unary(&a.normalize()?)
}

/// Normalize, then make every step positive.
pub fn forward(a: impl Normalize) -> IxResult<Canonical> {
    to_forward(&a.normalize()?)
}

/// Normalize, then make every step negative.
pub fn backward(a: impl Normalize) -> IxResult<Canonical> {
    to_backward(&a.normalize()?)
}
