use lazy_static::lazy_static;
use regex::Regex;

use crate::{Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("\\s+").unwrap();

    // Patterns are tried in order; the first one matching at the current
    // position wins. Anything no pattern claims becomes an identifier.
    static ref TOKEN_PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&") },
        RegexPattern { regex: Regex::new("\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "|") },
        RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=") },
    ];
}

/// A forward-only scanner over an expression string.
///
/// The token stream is produced lazily through the `Iterator` impl, which
/// yields the `EOF` token exactly once as the final element.
pub struct Lexer {
    source: String,
    pos: usize,
    reached_eof: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: String::from(source),
            pos: 0,
            reached_eof: false,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        if let Some(found) = WHITESPACE.find(self.remainder()) {
            if found.start() == 0 {
                self.advance_n(found.end());
            }
        }
    }

    /// Scans the next token. Scanning never fails: every character is
    /// whitespace, a digit run, a known operator or an identifier.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span::new(self.pos, self.pos));
        }

        let mut matched: Option<(RegexHandler, String)> = None;

        for pattern in TOKEN_PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(self.remainder()) {
                if found.start() == 0 {
                    matched = Some((pattern.handler, String::from(found.as_str())));
                    break;
                }
            }
        }

        match matched {
            Some((handler, value)) => handler(self, &value),
            None => {
                // Anything outside the known vocabulary is a one-character
                // identifier (or a reserved ordering letter).
                let value: String = self.remainder().chars().take(1).collect();
                symbol_handler(self, &value)
            }
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.reached_eof {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.reached_eof = true;
        }
        Some(token)
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Token {
    let start = Lexer::position(lexer);
    lexer.advance_n(matched.len());

    MK_TOKEN!(
        TokenKind::Number,
        String::from(matched),
        Span::new(start, start + matched.len())
    )
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Token {
    let start = Lexer::position(lexer);
    lexer.advance_n(matched.len());

    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        MK_TOKEN!(*kind, String::from(matched), Span::new(start, start + matched.len()))
    } else {
        MK_TOKEN!(
            TokenKind::Identifier,
            String::from(matched),
            Span::new(start, start + matched.len())
        )
    }
}

/// Collects the full token stream for the given source.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
