use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::SharedRegistry;
use ixa_value::IxErrorKind;

/// A host index type that knows nothing about this crate.
struct Column(u16);

#[test]
fn builtins_cover_integers_and_ranges() {
    let registry = NormalizeRegistry::with_builtins();
    assert!(registry.contains::<u8>());
    assert!(registry.contains::<Range<i64>>());
    assert!(registry.contains::<Canonical>());
    assert_eq!(registry.normalize(&42u32).unwrap(), Canonical::Scalar(42));
    assert_eq!(
        registry.normalize(&(2i64..7)).unwrap(),
        Canonical::Range(LinearRange::unit(2, 6))
    );
}

#[test]
fn missing_rule_names_runtime_type() {
    let registry = NormalizeRegistry::with_builtins();
    let err = registry.normalize(&1.5f64).unwrap_err();
    assert_eq!(
        err.kind,
        IxErrorKind::UnsupportedType {
            type_name: "f64".to_string()
        }
    );
}

#[test]
fn custom_rule_is_used() {
    let mut registry = NormalizeRegistry::new();
    assert!(registry.is_empty());
    registry.register::<Column, _>(|c| Ok(Canonical::Scalar(i64::from(c.0))));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.normalize(&Column(4)).unwrap(), Canonical::Scalar(4));
}

#[test]
fn erased_values_dispatch_on_inner_type() {
    let registry = NormalizeRegistry::with_builtins();
    let boxed: Arc<dyn AnyIndex> = Arc::new(LinearRange::unit(1, 3));
    assert_eq!(
        registry.normalize(&*boxed).unwrap(),
        Canonical::Range(LinearRange::unit(1, 3))
    );
}

#[test]
fn argument_count_is_checked() {
    let registry = NormalizeRegistry::with_builtins();
    let err = registry.normalize_args("normalize", &[]).unwrap_err();
    assert_eq!(
        err.kind,
        IxErrorKind::MissingArgument {
            function: "normalize".to_string()
        }
    );
    let err = registry.normalize_args("normalize", &[&1i64, &2i64]).unwrap_err();
    assert!(matches!(err.kind, IxErrorKind::ArityMismatch { got: 2, .. }));
    assert_eq!(
        registry.normalize_args("normalize", &[&7u8]).unwrap(),
        Canonical::Scalar(7)
    );
}

#[test]
fn shared_registry_derefs_to_inner() {
    let shared = SharedRegistry::new(NormalizeRegistry::with_builtins());
    let clone = shared.clone();
    assert_eq!(shared.len(), clone.len());
    assert_eq!(clone.normalize(&3i8).unwrap(), Canonical::Scalar(3));
}
