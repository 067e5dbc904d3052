use pretty_assertions::assert_eq;

use super::*;
use ixa_value::{IxErrorKind, MultiIndex};

fn r(first: i64, step: i64, last: i64) -> LinearRange {
    LinearRange::new(first, step, last).unwrap()
}

fn range(first: i64, step: i64, last: i64) -> Canonical {
    Canonical::Range(r(first, step, last))
}

fn multi<const N: usize>(c: [i64; N]) -> Canonical {
    Canonical::Multi(MultiIndex::from(c))
}

// stretch

#[test]
fn stretching_empty_range_moves_its_bounds() {
    let empty = Canonical::Range(LinearRange::EMPTY);
    assert_eq!(stretch(&empty, &Canonical::Scalar(2)).unwrap(), range(-1, 1, 2));
}

#[test]
fn stretch_scalar_gives_unit_range() {
    assert_eq!(
        stretch(&Canonical::Scalar(5), &Canonical::Scalar(2)).unwrap(),
        range(3, 1, 7)
    );
    assert_eq!(
        stretch(&Canonical::Scalar(5), &Canonical::Scalar(-1)).unwrap(),
        Canonical::Range(LinearRange::EMPTY)
    );
}

#[test]
fn stretch_multi_gives_region() {
    let g = stretch(&multi([7, 8]), &Canonical::Scalar(2)).unwrap();
    assert_eq!(g.to_string(), "(5:9, 6:10)");
    let g = stretch(&multi([7, 8]), &multi([0, 1])).unwrap();
    assert_eq!(g.to_string(), "(7:7, 7:9)");
}

#[test]
fn stretch_range_keeps_step_and_direction() {
    assert_eq!(
        stretch(&range(1, 3, 10), &Canonical::Scalar(3)).unwrap(),
        range(-2, 3, 13)
    );
    assert_eq!(
        stretch(&range(10, -2, 4), &Canonical::Scalar(4)).unwrap(),
        range(14, -2, 0)
    );
    assert_eq!(
        stretch(&range(6, -1, 3), &Canonical::Scalar(1)).unwrap(),
        range(7, -1, 2)
    );
}

#[test]
fn stretch_requires_multiple_of_step() {
    let err = stretch(&range(1, 3, 10), &Canonical::Scalar(2)).unwrap_err();
    assert_eq!(
        err.kind,
        IxErrorKind::InvalidStretchAmount { amount: 2, step: 3 }
    );
}

#[test]
fn stretch_region_per_dimension() {
    let g = Canonical::Region(Region::new([r(1, 1, 3), r(0, 2, 4)]));
    assert_eq!(
        stretch(&g, &multi([1, 2])).unwrap().to_string(),
        "(0:4, -2:2:6)"
    );
    let err = stretch(&g, &multi([1])).unwrap_err();
    assert!(matches!(err.kind, IxErrorKind::DimensionMismatch { .. }));
}

#[test]
fn stretch_by_range_is_undefined() {
    let err = stretch(&Canonical::Scalar(1), &range(1, 1, 2)).unwrap_err();
    assert!(matches!(err.kind, IxErrorKind::UndefinedOperation { .. }));
}

// shrink

#[test]
fn shrink_range_moves_bounds_inward() {
    assert_eq!(
        shrink(&range(1, 1, 10), &Canonical::Scalar(2)).unwrap(),
        range(3, 1, 8)
    );
    assert_eq!(
        shrink(&range(10, -2, 0), &Canonical::Scalar(4)).unwrap(),
        range(6, -2, 4)
    );
}

#[test]
fn shrink_past_middle_is_empty() {
    assert_eq!(
        shrink(&range(1, 1, 4), &Canonical::Scalar(3)).unwrap(),
        Canonical::Range(LinearRange::EMPTY)
    );
}

#[test]
fn shrink_requires_multiple_of_step() {
    let err = shrink(&range(0, 4, 20), &Canonical::Scalar(6)).unwrap_err();
    assert_eq!(
        err.kind,
        IxErrorKind::InvalidShrinkAmount { amount: 6, step: 4 }
    );
}

#[test]
fn shrink_of_point_is_undefined() {
    let err = shrink(&Canonical::Scalar(3), &Canonical::Scalar(1)).unwrap_err();
    assert!(matches!(err.kind, IxErrorKind::UndefinedOperation { .. }));
    let err = shrink(&multi([1, 2]), &Canonical::Scalar(1)).unwrap_err();
    assert!(err.notes.iter().any(|n| n.contains("cannot be shrunk")));
}

#[test]
fn shrink_region_undoes_stretch() {
    let g = Canonical::Region(Region::new([r(1, 1, 3), r(5, 1, 6)]));
    let k = Canonical::Scalar(2);
    assert_eq!(shrink(&stretch(&g, &k).unwrap(), &k).unwrap(), g);
}
