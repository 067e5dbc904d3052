use pretty_assertions::assert_eq;

use super::*;

// Kind → message

#[test]
fn missing_argument_names_function() {
    let err = missing_argument("normalize");
    assert_eq!(
        err.kind,
        IxErrorKind::MissingArgument {
            function: "normalize".to_string()
        }
    );
    assert_eq!(err.message(), "`normalize` requires an argument");
}

#[test]
fn unsupported_type_suggests_rule_and_escape() {
    let err = unsupported_type("f64");
    assert_eq!(err.message(), "no normalization rule for values of type `f64`");
    assert_eq!(
        err.notes,
        vec![
            "register a normalization rule for `f64`".to_string(),
            ESCAPE_HINT.to_string(),
        ]
    );
}

#[test]
fn stretch_amount_note_names_step() {
    let err = invalid_stretch_amount(3, 2);
    assert_eq!(
        err.message(),
        "stretch amount 3 is not a multiple of the range step 2"
    );
    assert!(err.notes[0].contains("multiple of 2"));
}

#[test]
fn shrink_amount_has_correct_kind() {
    let err = invalid_shrink_amount(5, -3);
    assert_eq!(
        err.kind,
        IxErrorKind::InvalidShrinkAmount {
            amount: 5,
            step: -3
        }
    );
}

#[test]
fn undefined_operation_lists_both_operands() {
    let err = undefined_operation("plus", Form::Range, Some(Form::Range));
    assert_eq!(
        err.message(),
        "`plus` is not defined for linear range and linear range"
    );
}

#[test]
fn undefined_unary_operation_lists_one_operand() {
    let err = undefined_operation("minus", Form::Region, None);
    assert_eq!(err.message(), "`minus` is not defined for region");
}

#[test]
fn shrink_of_point_adds_hint() {
    let err = shrink_of_point(Form::Scalar, Form::Scalar);
    assert_eq!(err.notes.len(), 3);
    assert!(err.notes[2].contains("cannot be shrunk"));
}

#[test]
fn unknown_function_lists_builtins() {
    let err = unknown_function("frobnicate");
    assert_eq!(err.message(), "unknown function: frobnicate");
    assert!(err.notes[0].starts_with("known functions: plus, minus, cap"));
}

#[test]
fn index_out_of_range_formats_value() {
    let err = index_out_of_range(u64::MAX, "u64");
    assert_eq!(
        err.message(),
        "value 18446744073709551615 of type `u64` does not fit in a 64-bit index"
    );
}

// Spans

#[test]
fn default_span_does_not_override_inner_span() {
    let inner = Span::new(4, 6);
    let outer = Span::new(0, 10);
    let err = zero_step().with_default_span(inner).with_default_span(outer);
    assert_eq!(err.span, Some(inner));
}

#[test]
fn syntax_error_carries_span() {
    let err = syntax("expected `)`", Span::new(3, 4));
    assert_eq!(err.span, Some(Span::new(3, 4)));
    assert_eq!(err.to_string(), "expected `)`");
}

#[test]
fn kind_converts_into_error_without_notes() {
    let err: IxError = IxErrorKind::DivisionByZero.into();
    assert_eq!(err, IxError::new(IxErrorKind::DivisionByZero));
    assert!(err.notes.is_empty());
}
