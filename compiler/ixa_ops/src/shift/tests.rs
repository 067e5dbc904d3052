use pretty_assertions::assert_eq;

use super::*;
use ixa_value::{IxErrorKind, Region};

fn r(first: i64, step: i64, last: i64) -> Canonical {
    Canonical::Range(LinearRange::new(first, step, last).unwrap())
}

fn unit(first: i64, last: i64) -> Canonical {
    Canonical::Range(LinearRange::unit(first, last))
}

fn multi<const N: usize>(c: [i64; N]) -> Canonical {
    Canonical::Multi(MultiIndex::from(c))
}

fn region(ranges: &[(i64, i64)]) -> Canonical {
    Canonical::Region(
        ranges
            .iter()
            .map(|&(f, l)| LinearRange::unit(f, l))
            .collect::<Region>(),
    )
}

// plus

#[test]
fn plus_shifts_range_either_side() {
    assert_eq!(add(&unit(2, 6), &Canonical::Scalar(1)).unwrap(), unit(3, 7));
    assert_eq!(
        add(&Canonical::Scalar(-2), &r(11, -3, -1)).unwrap(),
        r(9, -3, -3)
    );
}

#[test]
fn plus_of_two_ranges_is_undefined() {
    let err = add(&unit(1, 2), &unit(3, 4)).unwrap_err();
    assert_eq!(
        err.kind,
        IxErrorKind::UndefinedOperation {
            operation: "plus".to_string(),
            operands: "linear range and linear range".to_string(),
        }
    );
}

#[test]
fn plus_multi_is_componentwise() {
    assert_eq!(add(&multi([1, 2]), &multi([10, 20])).unwrap(), multi([11, 22]));
    assert_eq!(
        add(&region(&[(1, 3), (4, 6)]), &multi([1, -1])).unwrap(),
        region(&[(2, 4), (3, 5)])
    );
}

#[test]
fn plus_checks_dimensions() {
    let err = add(&multi([1, 2]), &multi([1, 2, 3])).unwrap_err();
    assert_eq!(
        err.kind,
        IxErrorKind::DimensionMismatch {
            operation: "plus".to_string(),
            left: 2,
            right: 3,
        }
    );
}

#[test]
fn plus_overflow_is_reported() {
    let err = add(&Canonical::Scalar(i64::MAX), &Canonical::Scalar(1)).unwrap_err();
    assert!(matches!(err.kind, IxErrorKind::IntegerOverflow { .. }));
}

#[test]
fn shifting_empty_range_stays_canonical() {
    let empty = Canonical::Range(LinearRange::EMPTY);
    assert_eq!(add(&empty, &Canonical::Scalar(i64::MAX)).unwrap(), empty);
}

// minus

#[test]
fn minus_scalar_from_unit_range_stays_increasing() {
    assert_eq!(sub(&Canonical::Scalar(1), &unit(3, 6)).unwrap(), unit(-5, -2));
}

#[test]
fn minus_scalar_from_stepped_range_negates_step() {
    assert_eq!(
        sub(&Canonical::Scalar(0), &r(1, 2, 7)).unwrap(),
        r(-1, -2, -7)
    );
    assert_eq!(
        sub(&Canonical::Scalar(10), &r(3, -1, 1)).unwrap(),
        r(7, 1, 9)
    );
}

#[test]
fn minus_range_scalar_keeps_step() {
    assert_eq!(sub(&r(5, 6, 11), &Canonical::Scalar(5)).unwrap(), r(0, 6, 6));
}

#[test]
fn minus_multi_from_region_mirrors() {
    assert_eq!(
        sub(&multi([0, 10]), &region(&[(1, 3), (4, 6)])).unwrap(),
        region(&[(-3, -1), (4, 6)])
    );
}

#[test]
fn minus_region_region_is_undefined() {
    let g = region(&[(1, 2)]);
    assert!(matches!(
        sub(&g, &g).unwrap_err().kind,
        IxErrorKind::UndefinedOperation { .. }
    ));
}

// unary

#[test]
fn negate_follows_mirror_rule() {
    assert_eq!(negate(&Canonical::Scalar(4)).unwrap(), Canonical::Scalar(-4));
    assert_eq!(negate(&unit(2, 5)).unwrap(), unit(-5, -2));
    assert_eq!(negate(&r(1, 3, 7)).unwrap(), r(-1, -3, -7));
    assert_eq!(negate(&multi([1, -2])).unwrap(), multi([-1, 2]));
    assert_eq!(
        negate(&Canonical::Range(LinearRange::EMPTY_REVERSED)).unwrap(),
        Canonical::Range(LinearRange::EMPTY)
    );
}

#[test]
fn negate_min_overflows() {
    assert!(negate(&Canonical::Scalar(i64::MIN)).is_err());
}
