#![deny(clippy::arithmetic_side_effects)]
//! Ixa Normalize - the single point of validation for index-like inputs.
//!
//! Two extension points feed the same canonical forms:
//!
//! - [`Normalize`], implemented at compile time for primitive integers,
//!   standard ranges, [`StepRange`], arrays, tuples and the canonical types;
//! - [`NormalizeRegistry`], keyed by `TypeId`, for host values bound into the
//!   evaluator whose static type is erased.
//!
//! Rules can only produce a [`Canonical`], so every operator downstream
//! dispatches over a closed set of shapes.

mod impls;
mod registry;
mod shared;
mod step_range;

use ixa_value::{Canonical, IxResult};

pub use impls::{from_components, IndexInt};
pub use registry::{AnyIndex, NormalizeRegistry};
pub use shared::SharedRegistry;
pub use step_range::StepRange;

/// Conversion of an index-like value into one of the four canonical forms.
///
/// Implementations must be idempotent: normalizing the result again yields
/// the same value.
pub trait Normalize {
    fn normalize(&self) -> IxResult<Canonical>;
}

/// Free-function spelling of [`Normalize::normalize`].
#[inline]
pub fn normalize<T: Normalize + ?Sized>(value: &T) -> IxResult<Canonical> {
    value.normalize()
}
