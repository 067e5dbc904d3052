use pretty_assertions::assert_eq;

use super::*;
use crate::Canonical;

fn region(ranges: &[(i64, i64)]) -> Region {
    ranges
        .iter()
        .map(|&(first, last)| LinearRange::unit(first, last))
        .collect()
}

#[test]
fn empty_when_any_dimension_is_empty() {
    assert!(!region(&[(1, 3), (2, 2)]).is_empty());
    assert!(region(&[(1, 3), (5, 4)]).is_empty());
}

#[test]
fn len_is_product_of_dimensions() {
    assert_eq!(region(&[(5, 9), (6, 10)]).len(), 25);
    assert_eq!(region(&[(1, 3), (5, 4)]).len(), 0);
    let huge = region(&[(i64::MIN, i64::MAX), (i64::MIN, i64::MAX)]);
    assert_eq!(huge.len(), u128::MAX);
}

#[test]
fn contains_checks_every_dimension() {
    let g = region(&[(5, 9), (6, 10)]);
    assert!(g.contains(&MultiIndex::from([7, 8])));
    assert!(!g.contains(&MultiIndex::from([7, 11])));
    assert!(!g.contains(&MultiIndex::from([7])));
}

#[test]
fn unit_when_every_step_is_one() {
    assert!(region(&[(1, 2), (3, 4)]).is_unit());
    let mixed = Region::new([
        LinearRange::unit(1, 2),
        LinearRange::new(9, -1, 3).unwrap_or(LinearRange::EMPTY),
    ]);
    assert!(!mixed.is_unit());
}

#[test]
fn display_matches_tuple_syntax() {
    assert_eq!(region(&[(5, 9), (6, 10)]).to_string(), "(5:9, 6:10)");
    assert_eq!(region(&[(1, 2)]).to_string(), "(1:2,)");
    assert_eq!(MultiIndex::from([7, 8]).to_string(), "(7, 8)");
    assert_eq!(MultiIndex::from([7]).to_string(), "(7,)");
}

#[test]
fn canonical_reports_form_and_dims() {
    let multi = Canonical::from(MultiIndex::from([1, 2, 3]));
    assert_eq!(multi.form(), crate::Form::Multi);
    assert_eq!(multi.dims(), Some(3));
    assert_eq!(Canonical::Scalar(4).dims(), None);
    assert_eq!(Canonical::Scalar(4).as_scalar(), Some(4));
    assert_eq!(
        Canonical::from(region(&[(5, 9), (6, 10)])).to_string(),
        "(5:9, 6:10)"
    );
}
