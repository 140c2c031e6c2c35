use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A recoverable parse error.
///
/// The parser records these and keeps going; none of them stops a parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected next token to be {expected}, got {received} instead")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixHandler { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
    #[error("unterminated block: expected }}, got EOF instead")]
    UnterminatedBlock,
    #[error("expression nested too deeply: more than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::UnexpectedToken { .. } => "UnexpectedToken",
            Error::NoPrefixHandler { .. } => "NoPrefixHandler",
            Error::IntegerParseError { .. } => "IntegerParseError",
            Error::UnterminatedBlock => "UnterminatedBlock",
            Error::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }
}
