//! Runtime values.

use std::fmt;
use std::sync::Arc;

use ixa_normalize::{AnyIndex, NormalizeRegistry};
use ixa_value::{Canonical, IxResult};

/// A value produced while evaluating an expression.
///
/// Operators only see [`Canonical`] values; host values are normalized
/// through the registry when an operator (or the final result) needs them.
#[derive(Clone, Debug)]
pub enum Value {
    Index(Canonical),
    Host(HostValue),
}

impl Value {
    /// Normalize into a canonical form.
    pub fn into_canonical(self, registry: &NormalizeRegistry) -> IxResult<Canonical> {
        match self {
            Value::Index(c) => Ok(c),
            Value::Host(h) => h.normalize(registry),
        }
    }
}

impl From<Canonical> for Value {
    fn from(c: Canonical) -> Self {
        Value::Index(c)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Index(c) => write!(f, "{c}"),
            Value::Host(h) => write!(f, "<{}>", h.type_name()),
        }
    }
}

/// A type-erased host value bound into the evaluator.
#[derive(Clone)]
pub struct HostValue(Arc<dyn AnyIndex>);

impl HostValue {
    pub fn new(value: impl AnyIndex) -> Self {
        HostValue(Arc::new(value))
    }

    pub fn type_name(&self) -> &'static str {
        (*self.0).type_name()
    }

    pub fn normalize(&self, registry: &NormalizeRegistry) -> IxResult<Canonical> {
        // Deref to the inner value; the `Arc` itself is also `AnyIndex`.
        registry.normalize(&*self.0)
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostValue({})", self.type_name())
    }
}
