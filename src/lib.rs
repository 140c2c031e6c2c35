//! Front end for a small C-like expression language.
//!
//! Source text is turned into tokens by [`lexer`], and [`parser`] turns a
//! token stream into the syntax tree defined in [`ast`]. Parse problems are
//! collected as [`errors::errors::Error`] values instead of aborting.
//!
//! ```
//! use exprlang::parser::parser::parse;
//!
//! let (parser, program) = parse("let x = 1 + 2 * 3;");
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```

#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;
