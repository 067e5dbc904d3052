use pretty_assertions::assert_eq;

use super::*;
use ixa_value::MultiIndex;

fn r(first: i64, step: i64, last: i64) -> LinearRange {
    LinearRange::new(first, step, last).unwrap()
}

#[test]
fn points_have_no_direction() {
    let m = Canonical::Multi(MultiIndex::from([3, -4]));
    assert_eq!(to_forward(&m).unwrap(), m);
    assert_eq!(to_backward(&Canonical::Scalar(9)).unwrap(), Canonical::Scalar(9));
}

#[test]
fn forward_reverses_negative_steps() {
    let down = Canonical::Range(r(11, -3, -2));
    assert_eq!(to_forward(&down).unwrap(), Canonical::Range(r(-1, 3, 11)));
    let up = Canonical::Range(r(1, 2, 9));
    assert_eq!(to_forward(&up).unwrap(), up);
}

#[test]
fn backward_of_unit_range_counts_down() {
    let up = Canonical::Range(LinearRange::unit(-5, -2));
    assert_eq!(to_backward(&up).unwrap().to_string(), "-2:-1:-5");
}

#[test]
fn empty_ranges_switch_constants() {
    let empty = Canonical::Range(LinearRange::EMPTY);
    let reversed = Canonical::Range(LinearRange::EMPTY_REVERSED);
    assert_eq!(to_backward(&empty).unwrap(), reversed);
    assert_eq!(to_forward(&reversed).unwrap(), empty);
}

#[test]
fn regions_are_fixed_per_dimension() {
    let g = Region::new([r(1, 1, 3), r(8, -2, 2)]);
    let fwd = to_forward(&Canonical::Region(g)).unwrap();
    assert_eq!(fwd.to_string(), "(1:3, 2:2:8)");
    let back = to_backward(&fwd).unwrap();
    assert_eq!(back.to_string(), "(3:-1:1, 8:-2:2)");
}

#[test]
fn unit_region_is_returned_unchanged() {
    let g = Canonical::Region(Region::new([LinearRange::unit(1, 4), LinearRange::unit(2, 3)]));
    assert_eq!(to_forward(&g).unwrap(), g);
}

#[test]
fn min_step_fails_during_normalization() {
    let err = crate::forward(ixa_normalize::StepRange::new(0i64, i64::MIN, i64::MIN)).unwrap_err();
    assert_eq!(
        err.kind,
        ixa_value::IxErrorKind::IntegerOverflow {
            operation: "range step".to_owned()
        }
    );
    // Every step that constructs can be reversed.
    let steep = Canonical::Range(r(i64::MAX, -i64::MAX, 0));
    assert_eq!(to_forward(&steep).unwrap(), Canonical::Range(r(0, i64::MAX, i64::MAX)));
}
