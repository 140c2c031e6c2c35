//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens one
//! at a time from a `TokenSource`, keeping the current token and exactly one
//! token of lookahead. Expressions are parsed Pratt-style with NUD/LED
//! handlers looked up by token kind.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Errors never abort a parse. They are pushed onto the parser's error list
//! and the handler that hit them returns `None`.

use std::{collections::HashMap, mem};

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::Error,
    lexer::{
        lexer::{Lexer, TokenSource},
        tokens::{Token, TokenKind},
    },
    MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest nesting of expressions and blocks accepted before the parser
/// gives up on a construct. Keeps pathological input from exhausting the
/// stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// A parser is single-use and single-threaded: parse each independent input
/// with its own parser and token source.
pub struct Parser<'a> {
    /// Where tokens are pulled from
    lexer: Box<dyn TokenSource + 'a>,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Errors recorded so far, in order
    errors: Vec<Error>,
    /// Current nesting of expressions and blocks
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser over `lexer`.
    ///
    /// Pulls two tokens to fill the current and lookahead slots and
    /// registers every handler. Cannot fail.
    pub fn new(lexer: impl TokenSource + 'a) -> Self {
        let mut parser = Parser {
            lexer: Box::new(lexer),
            current_token: MK_TOKEN!(TokenKind::EOF, String::new()),
            peek_token: MK_TOKEN!(TokenKind::EOF, String::new()),
            errors: vec![],
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };

        parser.advance();
        parser.advance();
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Shifts the lookahead into the current slot and pulls a new lookahead.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = mem::replace(&mut self.peek_token, next);
    }

    /// Advances if the lookahead is of kind `expected`.
    ///
    /// Otherwise records an `UnexpectedToken` error and leaves the cursor
    /// where it is.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Option<()> {
        if self.peek_is(expected) {
            self.advance();
            Some(())
        } else {
            self.record(Error::UnexpectedToken {
                expected,
                received: self.peek_token_kind(),
            });
            None
        }
    }

    /// Appends `error` to the error list.
    pub fn record(&mut self, error: Error) {
        debug!("parse error: {}", error);
        self.errors.push(error);
    }

    /// Enters one level of nesting.
    ///
    /// Past `MAX_NESTING_DEPTH` this records `NestingTooDeep` and returns
    /// `None` without entering. Every successful call must be paired with
    /// `leave_nesting`.
    pub fn enter_nesting(&mut self) -> Option<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.record(Error::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
            return None;
        }

        self.depth += 1;
        Some(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current nesting depth, zero between top-level statements.
    pub fn nesting_depth(&self) -> usize {
        self.depth
    }

    /// Returns every error recorded so far, in the order they occurred.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Binding power of the lookahead token, `Default` if it is not an operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power(self.peek_token_kind())
    }

    fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix registration leaves the binding power alone, since a token
    /// such as `-` is both a prefix and an infix operator.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that fail to parse are dropped; the cursor still moves
    /// forward at least one token per iteration, so this always terminates.
    pub fn parse_program(&mut self) -> Program {
        debug!("parsing program");

        let mut statements = vec![];

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors",
            statements.len(),
            self.errors.len()
        );

        Program { statements }
    }
}

/// Parses `source` into a Program.
///
/// This is the main entry point for parsing text. It tokenizes with the
/// reference lexer and returns the parser (for its errors) along with the
/// best-effort Program.
pub fn parse(source: &str) -> (Parser<'static>, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
