use std::collections::HashMap;

use crate::{ast::expressions::Expression, errors::errors::SyntaxError, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

// Infix binding powers; a higher power binds tighter to its operands.
const ORDERING_BINDING_POWER: u8 = 5;
const CONJUNCTION_BINDING_POWER: u8 = 10;
const DISJUNCTION_BINDING_POWER: u8 = 15;
const COMPARISON_BINDING_POWER: u8 = 20;
const ADDITIVE_BINDING_POWER: u8 = 25;
const MULTIPLICATIVE_BINDING_POWER: u8 = 30;

/// Shared by every prefix operator. Stronger than any infix power, so a
/// prefix operator swallows exactly the next tightly-bound subexpression
/// and stacked prefixes apply in source order.
pub const PREFIX_BINDING_POWER: u8 = 100;

pub type NUDHandler = fn(&mut Parser) -> Result<Expression, SyntaxError>;
pub type LEDHandler = fn(&mut Parser, Expression, u8) -> Result<Expression, SyntaxError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Arithmetic
    parser.led(TokenKind::Plus, ADDITIVE_BINDING_POWER, parse_binary_expr);
    parser.led(TokenKind::Dash, ADDITIVE_BINDING_POWER, parse_binary_expr);
    parser.led(TokenKind::Star, MULTIPLICATIVE_BINDING_POWER, parse_binary_expr);
    parser.led(TokenKind::Slash, MULTIPLICATIVE_BINDING_POWER, parse_binary_expr);

    // Comparisons
    parser.led(TokenKind::Greater, COMPARISON_BINDING_POWER, parse_binary_expr);
    parser.led(TokenKind::Less, COMPARISON_BINDING_POWER, parse_binary_expr);
    parser.led(TokenKind::Equals, COMPARISON_BINDING_POWER, parse_binary_expr);

    // Logical
    parser.led(TokenKind::Or, DISJUNCTION_BINDING_POWER, parse_binary_expr);
    parser.led(TokenKind::And, CONJUNCTION_BINDING_POWER, parse_binary_expr);

    // Ordering postfixes, weakest of the infix forms
    parser.led(TokenKind::Asc, ORDERING_BINDING_POWER, parse_postfix_expr);
    parser.led(TokenKind::Desc, ORDERING_BINDING_POWER, parse_postfix_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Plus, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // CloseParen and EOF stay unregistered: their binding power defaults to
    // 0, which stops the climbing loop when they follow an expression.
}

pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, u8>;
