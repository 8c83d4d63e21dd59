use crate::{
    ast::{
        expressions::Expression,
        operators::{BinaryOperator, UnaryOperator},
    },
    errors::errors::{SyntaxError, SyntaxErrorCause},
    lexer::tokens::TokenKind,
};

use super::{lookups::PREFIX_BINDING_POWER, parser::Parser};

pub fn parse_expr(parser: &mut Parser, binding_power: u8) -> Result<Expression, SyntaxError> {
    // First parse the NUD of the token in prefix position
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => {
            let token = parser.current_token();
            return Err(SyntaxError::new(
                SyntaxErrorCause::NoPrefixForm {
                    token: token.value.clone(),
                },
                token.span.start,
            ));
        }
    };

    let mut left = nud(parser)?;

    // While the lookahead binds tighter than the current floor, fold it
    // into the left-hand side with its LED
    while parser.current_binding_power() > binding_power {
        let token_kind = parser.current_token_kind();
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(handler) => *handler,
            None => {
                let token = parser.current_token();
                return Err(SyntaxError::new(
                    SyntaxErrorCause::NoInfixForm {
                        token: token.value.clone(),
                    },
                    token.span.start,
                ));
            }
        };

        let next_binding_power = parser.current_binding_power();
        left = led(parser, left, next_binding_power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, SyntaxError> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance();

            match token.value.parse::<u64>() {
                Ok(value) => Ok(Expression::Number(value)),
                Err(_) => Err(SyntaxError::new(
                    SyntaxErrorCause::NumberOutOfRange {
                        literal: token.value,
                    },
                    token.span.start,
                )),
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expression::Identifier(token.value))
        }
        _ => {
            let token = parser.current_token();
            Err(SyntaxError::new(
                SyntaxErrorCause::NoPrefixForm {
                    token: token.value.clone(),
                },
                token.span.start,
            ))
        }
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, SyntaxError> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::Plus => UnaryOperator::Plus,
        TokenKind::Dash => UnaryOperator::Minus,
        TokenKind::Not => UnaryOperator::Not,
        _ => {
            return Err(SyntaxError::new(
                SyntaxErrorCause::NoPrefixForm {
                    token: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    // Stacked prefixes nest in source order: each one takes whatever the
    // recursive call leaves behind.
    let operand = parse_expr(parser, PREFIX_BINDING_POWER)?;

    Ok(Expression::UnaryOperation {
        operand: Box::new(operand),
        operator,
    })
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    binding_power: u8,
) -> Result<Expression, SyntaxError> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::Plus => BinaryOperator::Plus,
        TokenKind::Dash => BinaryOperator::Minus,
        TokenKind::Star => BinaryOperator::Multiply,
        TokenKind::Slash => BinaryOperator::Divide,
        TokenKind::Greater => BinaryOperator::GreaterThan,
        TokenKind::Less => BinaryOperator::LessThan,
        TokenKind::Equals => BinaryOperator::Equal,
        TokenKind::And => BinaryOperator::And,
        TokenKind::Or => BinaryOperator::Or,
        _ => {
            return Err(SyntaxError::new(
                SyntaxErrorCause::NoInfixForm {
                    token: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    // Recursing with the operator's own power makes runs of equal-power
    // operators nest left-deep
    let right = parse_expr(parser, binding_power)?;

    Ok(Expression::BinaryOperation {
        left_operand: Box::new(left),
        operator,
        right_operand: Box::new(right),
    })
}

pub fn parse_postfix_expr(
    parser: &mut Parser,
    left: Expression,
    _binding_power: u8,
) -> Result<Expression, SyntaxError> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::Asc => UnaryOperator::Asc,
        TokenKind::Desc => UnaryOperator::Desc,
        _ => {
            return Err(SyntaxError::new(
                SyntaxErrorCause::NoInfixForm {
                    token: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    // No right operand; the postfix wraps everything parsed so far
    Ok(Expression::UnaryOperation {
        operand: Box::new(left),
        operator,
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, SyntaxError> {
    parser.advance();
    let expr = parse_expr(parser, 0)?;

    let missing = SyntaxError::new(
        SyntaxErrorCause::UnmatchedParenthesis,
        parser.current_token().span.start,
    );
    parser.expect(TokenKind::CloseParen, missing)?;

    Ok(expr)
}
