use std::fmt;

/// A stepped range over any primitive integer type, `first:step:last`.
///
/// The standard library has no stepped range value, so host code that wants
/// `1:3:10` over `u32` builds one of these. Validation (zero step, narrowing)
/// happens when it is normalized.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StepRange<T> {
    pub first: T,
    pub step: T,
    pub last: T,
}

impl<T> StepRange<T> {
    pub const fn new(first: T, step: T, last: T) -> Self {
        StepRange { first, step, last }
    }
}

impl<T: fmt::Display> fmt::Display for StepRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.first, self.step, self.last)
    }
}
