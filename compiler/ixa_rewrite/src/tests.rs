use pretty_assertions::assert_eq;

use super::*;

fn forward(source: &str) -> String {
    let parsed = ixa_parse::parse(source).unwrap();
    rewrite(&parsed.arena, parsed.root, Direction::Forward).to_string()
}

fn body(source: &str) -> String {
    let parsed = ixa_parse::parse(source).unwrap();
    rewrite_body(&parsed.arena, parsed.root).to_string()
}

#[test]
fn binary_operators_become_calls() {
    assert_eq!(forward("r + 1"), "forward(plus(r, 1))");
    assert_eq!(body("a - b"), "minus(a, b)");
    assert_eq!(body("a ∩ b"), "cap(a, b)");
    assert_eq!(body("a & b"), "cap(a, b)");
    assert_eq!(body("a ± 2"), "stretch(a, 2)");
    assert_eq!(body("a ∓ 2"), "shrink(a, 2)");
}

#[test]
fn unary_operators_become_calls() {
    assert_eq!(body("-r"), "minus(r)");
    assert_eq!(body("+r"), "plus(r)");
}

#[test]
fn intersect_is_renamed() {
    assert_eq!(body("intersect(a, b + 1)"), "cap(a, plus(b, 1))");
}

#[test]
fn plain_arithmetic_is_kept() {
    assert_eq!(body("2 * i + 1"), "plus((2 * i), 1)");
    assert_eq!(body("n / 2 % 3"), "((n / 2) % 3)");
}

#[test]
fn recurses_into_ranges_tuples_and_calls() {
    assert_eq!(body("i - 1:-1:1"), "minus(i, 1):minus(1):1");
    assert_eq!(body("(i + 1, j ± 1)"), "(plus(i, 1), stretch(j, 1))");
    assert_eq!(body("forward(a ∩ b)"), "forward(cap(a, b))");
}

#[test]
fn escape_blocks_rewriting() {
    assert_eq!(body("$(i + 1) ∩ r"), "cap(identity((i + 1)), r)");
    assert_eq!(body("$(intersect(a, b))"), "identity(intersect(a, b))");
}

#[test]
fn backward_wrapper() {
    let parsed = ixa_parse::parse("minus(1, 3:6)").unwrap();
    let rewritten = rewrite(&parsed.arena, parsed.root, Direction::Backward);
    assert_eq!(rewritten.to_string(), "backward(minus(1, 3:6))");
    assert_eq!(
        rewritten.arena.get_expr(rewritten.root).span,
        parsed.arena.get_expr(parsed.root).span
    );
}

#[test]
fn rewritten_calls_keep_operator_spans() {
    let parsed = ixa_parse::parse("a + b").unwrap();
    let rewritten = rewrite_body(&parsed.arena, parsed.root);
    assert_eq!(rewritten.arena.get_expr(rewritten.root).span, Span::new(0, 5));
}
