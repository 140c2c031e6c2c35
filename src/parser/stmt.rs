use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{
        expr::{current_identifier, parse_expr},
        lookups::BindingPower,
    },
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser<'_>) -> Option<Stmt> {
    trace!("parsing statement at {}", parser.current_token());

    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        let handler = *handler;
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser<'_>) -> Option<Stmt> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = current_identifier(parser);

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;

    // The terminator is optional
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser<'_>) -> Option<Stmt> {
    let token = parser.current_token().clone();

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
        return Some(Stmt::Return(ReturnStmt { token, value: None }));
    }

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Return(ReturnStmt {
        token,
        value: Some(value),
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser<'_>) -> Option<Stmt> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }`, entered with the current token on `{`.
///
/// Reaching EOF before the closing brace records an error and fails the
/// block.
pub fn parse_block_stmt(parser: &mut Parser<'_>) -> Option<BlockStmt> {
    parser.enter_nesting()?;
    let block = parse_block_body(parser);
    parser.leave_nesting();

    block
}

fn parse_block_body(parser: &mut Parser<'_>) -> Option<BlockStmt> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_is(TokenKind::CloseCurly) {
        if parser.current_is(TokenKind::EOF) {
            parser.record(Error::UnterminatedBlock);
            return None;
        }

        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    Some(BlockStmt {
        token,
        body: statements,
    })
}
