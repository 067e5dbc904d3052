use pretty_assertions::assert_eq;

use super::*;
use crate::IxErrorKind;

fn r(first: i64, step: i64, last: i64) -> LinearRange {
    LinearRange::new(first, step, last).unwrap()
}

// Construction

#[test]
fn zero_step_is_rejected() {
    let err = LinearRange::new(1, 0, 5).unwrap_err();
    assert_eq!(err.kind, IxErrorKind::ZeroStep);
}

#[test]
fn last_is_aligned_onto_step() {
    assert_eq!(r(1, 3, 11), r(1, 3, 10));
    assert_eq!(r(1, 3, 11).last(), 10);
    assert_eq!(r(11, -3, -2).last(), -1);
}

#[test]
fn empty_ranges_collapse() {
    assert_eq!(LinearRange::unit(5, 4), LinearRange::EMPTY);
    assert_eq!(r(7, 2, 3), LinearRange::EMPTY);
    assert_eq!(r(3, -1, 7), LinearRange::EMPTY_REVERSED);
    assert!(LinearRange::EMPTY.is_empty());
    assert!(LinearRange::EMPTY_REVERSED.is_empty());
}

#[test]
fn extreme_bounds_do_not_overflow() {
    let full = LinearRange::unit(i64::MIN, i64::MAX);
    assert_eq!(full.len(), 1u128 << 64);
    let sparse = r(i64::MIN, i64::MAX, i64::MAX);
    assert_eq!(sparse.last(), i64::MAX - 1);
    assert_eq!(sparse.len(), 3);
}

// Queries

#[test]
fn length_counts_elements() {
    assert_eq!(LinearRange::unit(2, 6).len(), 5);
    assert_eq!(r(11, -3, -2).len(), 5);
    assert_eq!(LinearRange::singleton(4).len(), 1);
    assert_eq!(LinearRange::EMPTY.len(), 0);
}

#[test]
fn min_and_max_follow_direction() {
    let down = r(11, -3, -1);
    assert_eq!(down.min(), Some(-1));
    assert_eq!(down.max(), Some(11));
    assert_eq!(LinearRange::EMPTY.min(), None);
}

#[test]
fn contains_respects_lattice() {
    let odd = r(1, 2, 11);
    assert!(odd.contains(5));
    assert!(!odd.contains(6));
    assert!(!odd.contains(13));
    assert!(r(11, -3, -1).contains(2));
    assert!(!LinearRange::EMPTY.contains(0));
}

#[test]
fn iter_yields_elements_in_order() {
    let elems: Vec<i64> = r(11, -3, -2).iter().collect();
    assert_eq!(elems, vec![11, 8, 5, 2, -1]);
    assert_eq!(LinearRange::EMPTY.into_iter().count(), 0);
}

#[test]
fn iter_stops_at_max_without_wrapping() {
    let elems: Vec<i64> = LinearRange::unit(i64::MAX - 1, i64::MAX).iter().collect();
    assert_eq!(elems, vec![i64::MAX - 1, i64::MAX]);
}

// Reversal

#[test]
fn reversed_swaps_endpoints() {
    assert_eq!(LinearRange::unit(3, 6).reversed().unwrap(), r(6, -1, 3));
    assert_eq!(r(11, -3, -2).reversed().unwrap(), r(-1, 3, 11));
}

#[test]
fn reversed_empty_flips_constant() {
    assert_eq!(
        LinearRange::EMPTY.reversed().unwrap(),
        LinearRange::EMPTY_REVERSED
    );
    assert_eq!(
        LinearRange::EMPTY_REVERSED.reversed().unwrap(),
        LinearRange::EMPTY
    );
}

#[test]
fn min_step_is_rejected_at_construction() {
    let err = LinearRange::new(0, i64::MIN, i64::MIN).unwrap_err();
    assert_eq!(
        err.kind,
        IxErrorKind::IntegerOverflow {
            operation: "range step".to_string()
        }
    );
}

#[test]
fn steepest_steps_reverse() {
    let down = r(i64::MAX, -i64::MAX, 0);
    assert_eq!(down.reversed().unwrap(), r(0, i64::MAX, i64::MAX));
    let up = r(i64::MIN, i64::MAX, i64::MAX);
    assert_eq!(up.reversed().unwrap().step(), -i64::MAX);
}

// Display

#[test]
fn display_omits_unit_step() {
    assert_eq!(LinearRange::unit(3, 7).to_string(), "3:7");
    assert_eq!(r(5, 6, 11).to_string(), "5:6:11");
    assert_eq!(LinearRange::EMPTY_REVERSED.to_string(), "0:-1:1");
    assert_eq!(format!("{:?}", LinearRange::EMPTY), "LinearRange(1:0)");
}
