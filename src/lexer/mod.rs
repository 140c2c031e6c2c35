//! Lexical analysis module for the front end.
//!
//! This module contains the reference tokenizer that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - The `TokenSource` seam the parser pulls tokens through
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Illegal characters, which become `Illegal` tokens rather than failures

pub mod lexer;
pub mod tokens;
