//! Runtime normalization rules keyed by type.
//!
//! The evaluator holds host values behind `dyn AnyIndex`, so their static
//! type (and with it the [`Normalize`] impl) is gone by the time an operator
//! sees them. The registry recovers the rule from the value's `TypeId`.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::ops::{Range, RangeInclusive};

use ixa_value::{
    arity_mismatch, missing_argument, unsupported_type, Canonical, IxResult, LinearRange,
    MultiIndex, Region,
};
use rustc_hash::FxHashMap;

use crate::{Normalize, StepRange};

/// A value that can be handed to the registry.
///
/// Blanket-implemented for every `Any + Send + Sync` type. When holding a
/// `Box<dyn AnyIndex>` or `Arc<dyn AnyIndex>`, pass `&*value`: the smart
/// pointer is itself `AnyIndex` and would be looked up as such.
pub trait AnyIndex: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type, for error messages.
    fn type_name(&self) -> &'static str;
}

impl<T: Any + Send + Sync> AnyIndex for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

type RuleFn = Box<dyn Fn(&dyn Any) -> IxResult<Canonical> + Send + Sync>;

struct Rule {
    type_name: &'static str,
    apply: RuleFn,
}

/// Maps concrete types to normalization rules.
///
/// Built up front (`with_builtins` then `register`), then shared read-only
/// through [`SharedRegistry`](crate::SharedRegistry).
#[derive(Default)]
pub struct NormalizeRegistry {
    rules: FxHashMap<TypeId, Rule>,
}

macro_rules! register_all {
    ($registry:ident: $($t:ty),* $(,)?) => {
        $($registry.register_normalize::<$t>();)*
    };
}

impl NormalizeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        NormalizeRegistry::default()
    }

    /// A registry with rules for the primitive integers, the standard range
    /// types over `i32`/`i64`/`usize`, [`StepRange<i64>`], vectors of scalars
    /// and ranges, and the canonical types themselves.
    pub fn with_builtins() -> Self {
        let mut registry = NormalizeRegistry::new();
        register_all!(registry:
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
            Range<i32>, Range<i64>, Range<usize>,
            RangeInclusive<i32>, RangeInclusive<i64>, RangeInclusive<usize>,
            StepRange<i32>, StepRange<i64>,
            Vec<i64>, Vec<usize>, Vec<LinearRange>,
            LinearRange, MultiIndex, Region, Canonical,
        );
        registry
    }

    /// Register a custom rule for `T`, replacing any previous one.
    pub fn register<T, F>(&mut self, rule: F) -> &mut Self
    where
        T: Any,
        F: Fn(&T) -> IxResult<Canonical> + Send + Sync + 'static,
    {
        let name = type_name::<T>();
        tracing::debug!(type_name = name, "registering normalization rule");
        let apply: RuleFn = Box::new(move |value: &dyn Any| match value.downcast_ref::<T>() {
            Some(value) => rule(value),
            None => Err(unsupported_type(name)),
        });
        self.rules.insert(
            TypeId::of::<T>(),
            Rule {
                type_name: name,
                apply,
            },
        );
        self
    }

    /// Register `T`'s [`Normalize`] impl as its runtime rule.
    pub fn register_normalize<T: Normalize + Any>(&mut self) -> &mut Self {
        self.register::<T, _>(<T as Normalize>::normalize)
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.rules.contains_key(&TypeId::of::<T>())
    }

    /// Normalize a type-erased value.
    pub fn normalize(&self, value: &dyn AnyIndex) -> IxResult<Canonical> {
        let any = value.as_any();
        match self.rules.get(&any.type_id()) {
            Some(rule) => (rule.apply)(any),
            None => {
                tracing::debug!(type_name = value.type_name(), "no normalization rule");
                Err(unsupported_type(value.type_name()))
            }
        }
    }

    /// Normalize the argument list of a one-argument call.
    pub fn normalize_args(&self, function: &str, args: &[&dyn AnyIndex]) -> IxResult<Canonical> {
        match args {
            [] => Err(missing_argument(function)),
            [value] => self.normalize(*value),
            _ => Err(arity_mismatch(function, "1 argument", args.len())),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for NormalizeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.rules.values().map(|r| r.type_name).collect();
        names.sort_unstable();
        f.debug_struct("NormalizeRegistry")
            .field("types", &names)
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
