use std::fmt::Display;

use thiserror::Error;

/// A failed parse. Carries the cause and the byte offset of the token that
/// triggered it. Parsing stops at the first error; no partial tree is
/// returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    cause: SyntaxErrorCause,
    position: usize,
}

impl SyntaxError {
    pub fn new(cause: SyntaxErrorCause, position: usize) -> Self {
        SyntaxError { cause, position }
    }

    pub fn cause(&self) -> &SyntaxErrorCause {
        &self.cause
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "syntax error at offset {}: {}", self.position, self.cause)
    }
}

impl std::error::Error for SyntaxError {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxErrorCause {
    #[error("token `{token}` cannot start an expression")]
    NoPrefixForm { token: String },
    #[error("token `{token}` cannot continue an expression")]
    NoInfixForm { token: String },
    #[error("expected `)` to close the group")]
    UnmatchedParenthesis,
    #[error("number literal `{literal}` is out of range")]
    NumberOutOfRange { literal: String },
}
