#![deny(clippy::arithmetic_side_effects)]
//! Ixa Value - canonical forms of index-like values.
//!
//! Every index-like input is reduced to one of four shapes before any
//! arithmetic happens:
//!
//! | form | type |
//! |---|---|
//! | scalar index | `i64` |
//! | linear range | [`LinearRange`] |
//! | multi index | [`MultiIndex`] |
//! | region | [`Region`] |
//!
//! [`Canonical`] is the closed sum of the four. The crate also owns the error
//! type shared by normalization, the operators and the evaluator.
//!
//! All components are `i64`, whatever the width of the original input.
//! Arithmetic goes through [`checked`], so overflow is reported instead of
//! wrapping.

mod canonical;
pub mod checked;
mod errors;
mod multi;
mod range;
mod region;

pub use canonical::{Canonical, Form};
pub use errors::{IxError, IxErrorKind, IxResult};
pub use multi::MultiIndex;
pub use range::{LinearRange, LinearRangeIter};
pub use region::Region;

pub use errors::{
    arity_mismatch, dimension_mismatch, division_by_zero, index_out_of_range, integer_overflow,
    invalid_shrink_amount, invalid_stretch_amount, missing_argument, shrink_of_point, syntax,
    undefined_operation, undefined_variable, unknown_function, unsupported_type, zero_step,
};
