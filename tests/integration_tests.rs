//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API from source text through tokenization
//! and parsing to the rendered expression tree.

use expr_parser::{parse, BinaryOperator, Expression, SyntaxErrorCause, UnaryOperator};

#[test]
fn test_parse_builds_the_expected_tree() {
    let tree = parse("1 + 2 * 3").unwrap();

    assert_eq!(
        tree,
        Expression::BinaryOperation {
            left_operand: Box::new(Expression::Number(1)),
            operator: BinaryOperator::Plus,
            right_operand: Box::new(Expression::BinaryOperation {
                left_operand: Box::new(Expression::Number(2)),
                operator: BinaryOperator::Multiply,
                right_operand: Box::new(Expression::Number(3)),
            }),
        }
    );
}

#[test]
fn test_parse_postfix_tree_shape() {
    let tree = parse("x D").unwrap();

    assert_eq!(
        tree,
        Expression::UnaryOperation {
            operand: Box::new(Expression::Identifier(String::from("x"))),
            operator: UnaryOperator::Desc,
        }
    );
}

#[test]
fn test_arithmetic_precedence_render() {
    let tree = parse("(-i * 2) / 15 - ((44 * i) - 15 * 2)").unwrap();
    assert_eq!(tree.to_string(), "((((- i) * 2) / 15) - ((44 * i) - (15 * 2)))");
}

#[test]
fn test_logic_precedence_render() {
    let tree = parse("!i & i | (i & i)").unwrap();
    assert_eq!(tree.to_string(), "((NOT i) AND (i OR (i AND i)))");
}

#[test]
fn test_mixed_domain_render() {
    let tree = parse("i > 15 * (44 - i / 7) | i < 0").unwrap();
    assert_eq!(tree.to_string(), "((i > (15 * (44 - (i / 7)))) OR (i < 0))");
}

#[test]
fn test_unary_prefix_render() {
    let tree = parse("4 - +5").unwrap();
    assert_eq!(tree.to_string(), "(4 - (+ 5))");
}

#[test]
fn test_ordering_postfix_render() {
    let tree = parse("i * 2 D").unwrap();
    assert_eq!(tree.to_string(), "(DESC (i * 2))");
}

#[test]
fn test_stacked_prefix_render() {
    let tree = parse("!-i + -!i").unwrap();
    assert_eq!(tree.to_string(), "((! (- i)) + (- (! i)))");
}

#[test]
fn test_number_literal_bounds() {
    assert_eq!(
        parse("18446744073709551615"),
        Ok(Expression::Number(u64::MAX))
    );

    let error = parse("18446744073709551616").unwrap_err();
    assert_eq!(
        error.cause(),
        &SyntaxErrorCause::NumberOutOfRange {
            literal: String::from("18446744073709551616")
        }
    );
}

#[test]
fn test_unmatched_parenthesis_fails() {
    let error = parse("(1 + 2").unwrap_err();
    assert_eq!(error.cause(), &SyntaxErrorCause::UnmatchedParenthesis);
}

#[test]
fn test_operand_position_errors_fail() {
    assert!(parse(")").is_err());
    assert!(parse("").is_err());
    assert!(parse("1 *").is_err());
    assert!(parse("A").is_err());
}

#[test]
fn test_independent_parses_share_no_state() {
    let sources = ["1 + 2 * 3", "i > 0 | i < 9", "!x A", "((1))"];

    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let source = String::from(*source);
            std::thread::spawn(move || parse(&source).map(|tree| tree.to_string()))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}
