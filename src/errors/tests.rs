//! Unit tests for error handling.
//!
//! This module contains tests for error names and messages.

use crate::errors::errors::Error;
use crate::lexer::tokens::TokenKind;

#[test]
fn test_unexpected_token_error() {
    let error = Error::UnexpectedToken {
        expected: TokenKind::Assignment,
        received: TokenKind::Int,
    };

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_unexpected_token_error_names_identifiers() {
    let error = Error::UnexpectedToken {
        expected: TokenKind::Identifier,
        received: TokenKind::Assignment,
    };

    assert_eq!(
        error.to_string(),
        "expected next token to be IDENT, got = instead"
    );
}

#[test]
fn test_no_prefix_handler_error() {
    let error = Error::NoPrefixHandler {
        kind: TokenKind::CloseParen,
    };

    assert_eq!(error.get_error_name(), "NoPrefixHandler");
    assert_eq!(error.to_string(), "no prefix parse function for ) found");
}

#[test]
fn test_integer_parse_error() {
    let error = Error::IntegerParseError {
        literal: "99999999999999999999".to_string(),
    };

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_unterminated_block_error() {
    let error = Error::UnterminatedBlock;

    assert_eq!(error.get_error_name(), "UnterminatedBlock");
    assert_eq!(
        error.to_string(),
        "unterminated block: expected }, got EOF instead"
    );
}

#[test]
fn test_errors_compare_by_value() {
    let a = Error::NoPrefixHandler {
        kind: TokenKind::Semicolon,
    };

    assert_eq!(a.clone(), a);
    assert_ne!(a, Error::UnterminatedBlock);
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::NestingTooDeep { limit: 256 };

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(
        error.to_string(),
        "expression nested too deeply: more than 256 levels"
    );
}
