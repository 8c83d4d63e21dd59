//! Unit tests for the parser module.
//!
//! This module contains tests for expression parsing including:
//! - Operator precedence and left associativity
//! - Prefix, infix and postfix operator forms
//! - Parenthesized grouping
//! - Failure modes and reported positions

use crate::ast::expressions::Expression;
use crate::errors::errors::SyntaxErrorCause;

use super::parser::parse;

fn render(source: &str) -> String {
    parse(source).unwrap().to_string()
}

#[test]
fn test_parse_number_literal() {
    assert_eq!(parse("42"), Ok(Expression::Number(42)));
}

#[test]
fn test_parse_identifier() {
    assert_eq!(parse("x"), Ok(Expression::Identifier(String::from("x"))));
}

#[test]
fn test_left_associativity() {
    assert_eq!(render("1 - 2 - 3"), "((1 - 2) - 3)");
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(render("1 + 2 * 3"), "(1 + (2 * 3))");
}

#[test]
fn test_equal_power_operators_nest_left_deep() {
    assert_eq!(render("8 / 4 * 2"), "((8 / 4) * 2)");
    assert_eq!(render("1 < 2 < 3"), "((1 < 2) < 3)");
}

#[test]
fn test_binary_minus_with_unary_plus() {
    assert_eq!(render("4 - +5"), "(4 - (+ 5))");
}

#[test]
fn test_stacked_prefix_operators_apply_in_source_order() {
    assert_eq!(render("!-i + -!i"), "((! (- i)) + (- (! i)))");
}

#[test]
fn test_prefix_operator_takes_only_the_next_subexpression() {
    assert_eq!(render("-1 + 2"), "((- 1) + 2)");
}

#[test]
fn test_postfix_wraps_the_whole_expression() {
    assert_eq!(render("i * 2 D"), "(DESC (i * 2))");
    assert_eq!(render("i A"), "(ASC i)");
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(render("(1 + 2) * 3"), "((1 + 2) * 3)");
}

#[test]
fn test_mixed_arithmetic_and_logic() {
    assert_eq!(
        render("i > 15 * (44 - i / 7) | i < 0"),
        "((i > (15 * (44 - (i / 7)))) OR (i < 0))"
    );
}

#[test]
fn test_disjunction_binds_tighter_than_conjunction() {
    assert_eq!(render("!i & i | (i & i)"), "((NOT i) AND (i OR (i AND i)))");
}

#[test]
fn test_nested_grouping() {
    assert_eq!(
        render("(-i * 2) / 15 - ((44 * i) - 15 * 2)"),
        "((((- i) * 2) / 15) - ((44 * i) - (15 * 2)))"
    );
}

#[test]
fn test_equality_comparison() {
    assert_eq!(render("x = 4 + 1"), "(x = (4 + 1))");
}

#[test]
fn test_trailing_tokens_are_ignored() {
    assert_eq!(parse("1 2"), Ok(Expression::Number(1)));
    assert_eq!(parse("1 + 2 3").map(|tree| tree.to_string()), Ok(String::from("(1 + 2)")));
}

#[test]
fn test_unmatched_parenthesis() {
    let error = parse("(1 + 2").unwrap_err();

    assert_eq!(error.cause(), &SyntaxErrorCause::UnmatchedParenthesis);
    assert_eq!(error.position(), 6);
}

#[test]
fn test_close_paren_cannot_start_an_expression() {
    let error = parse(")").unwrap_err();

    assert_eq!(
        error.cause(),
        &SyntaxErrorCause::NoPrefixForm {
            token: String::from(")")
        }
    );
    assert_eq!(error.position(), 0);
}

#[test]
fn test_empty_input_fails() {
    let error = parse("").unwrap_err();

    assert_eq!(
        error.cause(),
        &SyntaxErrorCause::NoPrefixForm {
            token: String::from("EOF")
        }
    );
}

#[test]
fn test_missing_right_operand() {
    assert!(parse("1 +").is_err());
}

#[test]
fn test_postfix_cannot_start_an_expression() {
    assert!(parse("D").is_err());
    assert!(parse("A + 1").is_err());
}

#[test]
fn test_incomplete_operand_inside_group() {
    assert!(parse("5 * 3 - 4 + c / (13 -)").is_err());
}

#[test]
fn test_number_literal_at_u64_max() {
    assert_eq!(
        parse("18446744073709551615"),
        Ok(Expression::Number(u64::MAX))
    );
}

#[test]
fn test_number_literal_out_of_range() {
    let error = parse("99999999999999999999999").unwrap_err();

    assert_eq!(
        error.cause(),
        &SyntaxErrorCause::NumberOutOfRange {
            literal: String::from("99999999999999999999999")
        }
    );
}

// Renderings of the symbol-spelled operators are themselves valid input, so
// rendering and re-parsing must reproduce the same tree. The word-spelled
// operators (AND, OR, NOT, ASC, DESC) are excluded: their renderings do not
// re-lex as single tokens.
#[test]
fn test_render_parse_round_trip() {
    let sources = [
        "1 - 2 - 3",
        "1 + 2 * 3",
        "4 - +5",
        "8 / 4 * 2",
        "1 < 2 < 3",
        "(1 + 2) * (x - 4)",
        "-i / (2 > y) = 0",
    ];

    for source in sources {
        let tree = parse(source).unwrap();
        let reparsed = parse(&tree.to_string()).unwrap();
        assert_eq!(tree, reparsed, "round trip failed for {source:?}");
    }
}
