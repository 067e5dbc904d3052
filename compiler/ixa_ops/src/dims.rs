//! Per-dimension decomposition helpers.

use ixa_value::{dimension_mismatch, IxResult};

/// Fail unless both operands have the same dimensionality.
#[inline]
pub(crate) fn check_dims(operation: &str, left: usize, right: usize) -> IxResult<()> {
    if left == right {
        Ok(())
    } else {
        Err(dimension_mismatch(operation, left, right))
    }
}

/// Apply `f` to paired components, after checking the dimensionalities.
pub(crate) fn zip_dims<A, B, T, C>(
    operation: &str,
    left: &[A],
    right: &[B],
    f: impl Fn(&A, &B) -> IxResult<T>,
) -> IxResult<C>
where
    C: FromIterator<T>,
{
    check_dims(operation, left.len(), right.len())?;
    left.iter().zip(right).map(|(a, b)| f(a, b)).collect()
}
