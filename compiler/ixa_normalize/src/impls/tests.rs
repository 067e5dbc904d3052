use pretty_assertions::assert_eq;

use super::*;
use ixa_value::IxErrorKind;

fn range(first: i64, step: i64, last: i64) -> Canonical {
    Canonical::Range(LinearRange::new(first, step, last).unwrap())
}

// Scalars

#[test]
fn integers_of_every_width_become_i64() {
    assert_eq!(3u8.normalize().unwrap(), Canonical::Scalar(3));
    assert_eq!((-3i16).normalize().unwrap(), Canonical::Scalar(-3));
    assert_eq!(7usize.normalize().unwrap(), Canonical::Scalar(7));
    assert_eq!(
        i128::from(i64::MIN).normalize().unwrap(),
        Canonical::Scalar(i64::MIN)
    );
}

#[test]
fn narrowing_out_of_range_fails() {
    let err = u64::MAX.normalize().unwrap_err();
    assert_eq!(
        err.kind,
        IxErrorKind::IndexOutOfRange {
            value: u64::MAX.to_string(),
            type_name: "u64".to_string(),
        }
    );
    assert!(i128::MAX.normalize().is_err());
}

// Ranges

#[test]
fn half_open_range_drops_end() {
    assert_eq!((2..7).normalize().unwrap(), range(2, 1, 6));
    assert_eq!((0u32..1).normalize().unwrap(), range(0, 1, 0));
}

#[test]
fn empty_std_ranges_become_canonical_empty() {
    let empty = Canonical::Range(LinearRange::EMPTY);
    assert_eq!((5..5).normalize().unwrap(), empty);
    assert_eq!((0u8..0).normalize().unwrap(), empty);
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = 9..=3;
    assert_eq!(reversed.normalize().unwrap(), empty);
}

#[test]
fn inclusive_range_keeps_end() {
    assert_eq!((2..=6).normalize().unwrap(), range(2, 1, 6));
    assert_eq!((i64::MAX..=i64::MAX).normalize().unwrap(), range(i64::MAX, 1, i64::MAX));
}

#[test]
fn step_range_narrows_each_part() {
    assert_eq!(
        StepRange::new(11i32, -3, -2).normalize().unwrap(),
        range(11, -3, -1)
    );
    let err = StepRange::new(1u8, 0, 5).normalize().unwrap_err();
    assert_eq!(err.kind, IxErrorKind::ZeroStep);
    assert!(StepRange::new(0u64, 1, u64::MAX).normalize().is_err());
}

// Identity

#[test]
fn canonical_values_are_returned_unchanged() {
    let r = LinearRange::unit(3, 7);
    assert_eq!(r.normalize().unwrap(), Canonical::Range(r));
    let m = MultiIndex::from([1, 2]);
    assert_eq!(m.normalize().unwrap(), Canonical::Multi(m.clone()));
    let c = Canonical::Scalar(5);
    assert_eq!((&c).normalize().unwrap(), c);
}

#[test]
fn normalization_is_idempotent() {
    let once = (2..=6, 1..4).normalize().unwrap();
    assert_eq!(once.normalize().unwrap(), once);
}

// Collections

#[test]
fn tuple_of_integers_is_multi_index() {
    assert_eq!(
        (7u8, 8i64).normalize().unwrap(),
        Canonical::Multi(MultiIndex::from([7, 8]))
    );
    assert_eq!(
        [1, 2, 3].normalize().unwrap(),
        Canonical::Multi(MultiIndex::from([1, 2, 3]))
    );
}

#[test]
fn tuple_of_ranges_is_region() {
    let region = (5..=9, 6..=10).normalize().unwrap();
    assert_eq!(region.to_string(), "(5:9, 6:10)");
    assert_eq!(region.dims(), Some(2));
}

#[test]
fn mixed_tuple_is_unsupported() {
    let err = (1, 2..=3).normalize().unwrap_err();
    match err.kind {
        IxErrorKind::UnsupportedType { type_name } => assert!(type_name.starts_with('(')),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn component_errors_propagate() {
    let err = (1i64, u64::MAX).normalize().unwrap_err();
    assert!(matches!(err.kind, IxErrorKind::IndexOutOfRange { .. }));
}

#[test]
fn vec_and_slice_match_array() {
    let v = vec![LinearRange::unit(1, 2), LinearRange::unit(3, 4)];
    assert_eq!(v.normalize().unwrap(), v.as_slice().normalize().unwrap());
    assert_eq!(v.normalize().unwrap().dims(), Some(2));
}
