//! Parser state and entry point.
//!
//! The parser owns the lexer (the remaining token sequence) and a single
//! lookahead token, and dispatches through lookup tables registered by
//! `create_token_lookups`. There is no other state: precedence climbing
//! lives entirely in the call stack of `parse_expr`.

use std::collections::HashMap;
use std::mem;

use crate::{
    ast::expressions::Expression,
    errors::errors::SyntaxError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Span, MK_TOKEN,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, BPLookup, LEDHandler, LEDLookup, NUDHandler, NUDLookup},
};

/// The main parser structure.
///
/// Holds the token cursor (lexer plus one owned lookahead token) and the
/// lookup tables for prefix handlers, infix handlers and binding powers.
/// Created per parse call and discarded afterwards; independent parses
/// share nothing.
pub struct Parser {
    /// The remaining token sequence, consumed forward only
    lexer: Lexer,
    /// The single lookahead token
    current: Token,
    /// Lookup table for null denotation (prefix) handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix/postfix) handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance, priming the lookahead with the first
    /// token of the stream.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = next_token(&mut lexer);

        Parser {
            lexer,
            current,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the lookahead token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the infix binding power of the lookahead token. Tokens with
    /// no infix form default to 0 and never continue a left expression.
    pub fn current_binding_power(&self) -> u8 {
        *self
            .binding_power_lookup
            .get(&self.current.kind)
            .unwrap_or(&0)
    }

    /// Replaces the lookahead with the next token and returns the previous
    /// one. Once the stream is exhausted the lookahead stays `EOF`.
    pub fn advance(&mut self) -> Token {
        let next = next_token(&mut self.lexer);
        mem::replace(&mut self.current, next)
    }

    /// Consumes the lookahead if it has the expected kind, otherwise fails
    /// with the caller's error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - The error to return if the lookahead does not match
    pub fn expect(
        &mut self,
        expected_kind: TokenKind,
        error: SyntaxError,
    ) -> Result<Token, SyntaxError> {
        if self.current.kind != expected_kind {
            return Err(error);
        }

        Ok(self.advance())
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix/postfix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this operator
    pub fn led(&mut self, kind: TokenKind, binding_power: u8, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token. Prefix-only
    /// tokens keep the default binding power 0.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this token
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }
}

fn next_token(lexer: &mut Lexer) -> Token {
    let position = Lexer::position(lexer);
    lexer.next().unwrap_or_else(|| {
        MK_TOKEN!(
            TokenKind::EOF,
            String::from("EOF"),
            Span::new(position, position)
        )
    })
}

/// Parses a source string into an expression tree.
///
/// This is the main entry point. It creates a parser over a fresh lexer,
/// installs the token lookups and parses one full expression.
///
/// Parsing stops after the outermost expression: tokens trailing a complete
/// expression are left unconsumed and silently ignored, so `"1 2"` parses
/// to `1`.
///
/// # Arguments
///
/// * `source` - The expression text to parse
///
/// # Returns
///
/// The root of the expression tree, or the `SyntaxError` that stopped the
/// parse.
pub fn parse(source: &str) -> Result<Expression, SyntaxError> {
    let mut parser = Parser::new(Lexer::new(source));
    create_token_lookups(&mut parser);

    parse_expr(&mut parser, 0)
}
