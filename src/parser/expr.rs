use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FunctionLiteral, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Handlers are entered with the current token on the first token of their
/// construct and leave it on the last one. Each call counts as one level of
/// nesting.
pub fn parse_expr(parser: &mut Parser<'_>, bp: BindingPower) -> Option<Expr> {
    parser.enter_nesting()?;
    let expr = parse_nested_expr(parser, bp);
    parser.leave_nesting();

    expr
}

fn parse_nested_expr(parser: &mut Parser<'_>, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            parser.record(Error::NoPrefixHandler { kind: token_kind });
            return None;
        }
    };

    let mut left = nud(parser)?;

    // While the lookahead binds tighter than bp, keep folding it into lhs
    while parser.peek_binding_power() > bp {
        let led = match parser.get_led_lookup().get(&parser.peek_token_kind()) {
            Some(led) => *led,
            None => return Some(left),
        };
        let operator_bp = parser.peek_binding_power();

        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser<'_>) -> Option<Expr> {
    Some(Expr::Identifier(current_identifier(parser)))
}

pub fn parse_integer_expr(parser: &mut Parser<'_>) -> Option<Expr> {
    let token = parser.current_token().clone();

    let value = match token.value.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            parser.record(Error::IntegerParseError {
                literal: token.value.clone(),
            });
            0
        }
    };

    Some(Expr::Integer(IntegerExpr { token, value }))
}

pub fn parse_boolean_expr(parser: &mut Parser<'_>) -> Option<Expr> {
    Some(Expr::Boolean(BooleanExpr {
        token: parser.current_token().clone(),
        value: parser.current_is(TokenKind::True),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser<'_>) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Unary)?;

    Some(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser<'_>, left: Expr, bp: BindingPower) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    // Same bp on the right keeps equal-precedence operators left-associative
    let right = parse_expr(parser, bp)?;

    Some(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Some(expr)
}

pub fn parse_if_expr(parser: &mut Parser<'_>) -> Option<Expr> {
    // if (<condition>) { ... } else { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Some(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser<'_>) -> Option<Expr> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Some(Expr::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser<'_>) -> Option<Vec<IdentifierExpr>> {
    let mut parameters = Vec::new();

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(parameters);
    }

    parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(current_identifier(parser));

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(current_identifier(parser));
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Some(parameters)
}

pub fn parse_call_expr(parser: &mut Parser<'_>, left: Expr, _bp: BindingPower) -> Option<Expr> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Some(Expr::Call(CallExpr {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

/// Parses a comma separated, possibly empty, list of expressions up to `end`.
fn parse_expr_list(parser: &mut Parser<'_>, end: TokenKind) -> Option<Vec<Expr>> {
    let mut args = vec![];

    if parser.peek_is(end) {
        parser.advance();
        return Some(args);
    }

    parser.advance();
    args.push(parse_expr(parser, BindingPower::Default)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Default)?);
    }

    parser.expect_peek(end)?;

    Some(args)
}

pub(super) fn current_identifier(parser: &Parser<'_>) -> IdentifierExpr {
    let token = parser.current_token().clone();

    IdentifierExpr {
        value: token.value.clone(),
        token,
    }
}
