//! Unit tests for the AST module.
//!
//! Nodes are built by hand here so that canonical text and token literals
//! are checked independently of the parser.

use crate::{lexer::tokens::TokenKind, MK_TOKEN};

use super::{
    ast::{Expr, Node, Program, Stmt},
    expressions::{BooleanExpr, CallExpr, FunctionLiteral, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        token: MK_TOKEN!(TokenKind::Identifier, name.to_string()),
        value: name.to_string(),
    }
}

fn int(value: i64) -> Expr {
    Expr::Integer(IntegerExpr {
        token: MK_TOKEN!(TokenKind::Int, value.to_string()),
        value,
    })
}

fn block(body: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        token: MK_TOKEN!(TokenKind::OpenCurly, "{".to_string()),
        body,
    }
}

fn expr_stmt(expression: Expr) -> Stmt {
    Stmt::Expression(ExpressionStmt {
        token: MK_TOKEN!(TokenKind::Identifier, expression.token_literal().to_string()),
        expression,
    })
}

fn infix(left: Expr, operator: &str, kind: TokenKind, right: Expr) -> Expr {
    Expr::Infix(InfixExpr {
        token: MK_TOKEN!(kind, operator.to_string()),
        left: Box::new(left),
        operator: operator.to_string(),
        right: Box::new(right),
    })
}

#[test]
fn test_let_statement_text() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: MK_TOKEN!(TokenKind::Let, "let".to_string()),
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
    assert_eq!(program.token_literal(), "");
}

#[test]
fn test_return_statement_text() {
    let with_value = Stmt::Return(ReturnStmt {
        token: MK_TOKEN!(TokenKind::Return, "return".to_string()),
        value: Some(int(5)),
    });
    let without_value = Stmt::Return(ReturnStmt {
        token: MK_TOKEN!(TokenKind::Return, "return".to_string()),
        value: None,
    });

    assert_eq!(with_value.to_string(), "return 5;");
    assert_eq!(without_value.to_string(), "return;");
    assert_eq!(without_value.token_literal(), "return");
}

#[test]
fn test_operator_text_is_parenthesized() {
    let negated = Expr::Prefix(PrefixExpr {
        token: MK_TOKEN!(TokenKind::Dash, "-".to_string()),
        operator: "-".to_string(),
        right: Box::new(Expr::Identifier(ident("a"))),
    });
    let product = infix(negated, "*", TokenKind::Star, Expr::Identifier(ident("b")));

    assert_eq!(product.to_string(), "((-a) * b)");
    assert_eq!(product.token_literal(), "*");
}

#[test]
fn test_program_concatenates_statements() {
    let program = Program {
        statements: vec![
            expr_stmt(Expr::Identifier(ident("a"))),
            Stmt::Let(LetStmt {
                token: MK_TOKEN!(TokenKind::Let, "let".to_string()),
                name: ident("x"),
                value: int(1),
            }),
        ],
    };

    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "alet x = 1;");
}

#[test]
fn test_block_and_if_text() {
    let if_expr = Expr::If(IfExpr {
        token: MK_TOKEN!(TokenKind::If, "if".to_string()),
        condition: Box::new(Expr::Boolean(BooleanExpr {
            token: MK_TOKEN!(TokenKind::True, "true".to_string()),
            value: true,
        })),
        consequence: block(vec![expr_stmt(Expr::Identifier(ident("x")))]),
        alternative: Some(block(vec![])),
    });

    assert_eq!(if_expr.to_string(), "if (true) { x; } else { }");
    assert_eq!(if_expr.token_literal(), "if");
}

#[test]
fn test_function_and_call_text() {
    let function = Expr::Function(FunctionLiteral {
        token: MK_TOKEN!(TokenKind::Fn, "fn".to_string()),
        parameters: vec![ident("x"), ident("y")],
        body: block(vec![expr_stmt(infix(
            Expr::Identifier(ident("x")),
            "+",
            TokenKind::Plus,
            Expr::Identifier(ident("y")),
        ))]),
    });

    assert_eq!(function.to_string(), "fn(x, y) { (x + y); }");

    let call = Expr::Call(CallExpr {
        token: MK_TOKEN!(TokenKind::OpenParen, "(".to_string()),
        callee: Box::new(function),
        arguments: vec![int(1), int(2)],
    });

    assert_eq!(call.to_string(), "fn(x, y) { (x + y); }(1, 2)");
    assert_eq!(call.token_literal(), "(");
}

#[test]
fn test_block_statement_token_literal() {
    let stmt = Stmt::Block(block(vec![]));

    assert_eq!(stmt.token_literal(), "{");
    assert_eq!(stmt.to_string(), "{ }");
}
