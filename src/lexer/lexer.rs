use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// A producer of tokens, pulled one at a time by the parser.
///
/// Once the underlying input is exhausted, implementations must keep
/// returning an `EOF` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

pub type RegexHandler = fn(&mut Lexer, &str) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("lexer patterns are valid regular expressions"),
            handler,
        }
    }
}

// Order matters: two-character operators must come before their one-character prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^[0-9]+\\.[0-9]+", float_handler),
        RegexPattern::new("^[0-9]+", number_handler),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new("^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
    ];
    static ref WHITESPACE: Regex = Regex::new("^\\s+").expect("whitespace pattern is valid");
}

/// Regex-driven tokenizer that yields one token per `next_token` call.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
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
        if let Some(matched) = WHITESPACE.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new());
        }

        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(self.remainder()) {
                let text = matched.as_str().to_string();
                return (pattern.handler)(self, &text);
            }
        }

        illegal_handler(self)
    }
}

/// Exhausted vectors keep producing `EOF`.
impl TokenSource for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Token {
        self.next()
            .unwrap_or_else(|| MK_TOKEN!(TokenKind::EOF, String::new()))
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Token {
    lexer.advance_n(matched.len());
    MK_TOKEN!(TokenKind::Int, matched.to_string())
}

fn float_handler(lexer: &mut Lexer, matched: &str) -> Token {
    lexer.advance_n(matched.len());
    MK_TOKEN!(TokenKind::Float, matched.to_string())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Token {
    lexer.advance_n(matched.len());
    MK_TOKEN!(lookup_ident(matched), matched.to_string())
}

fn illegal_handler(lexer: &mut Lexer) -> Token {
    // Non-empty remainder, checked by the caller.
    let ch = lexer.remainder().chars().next().unwrap_or_default();
    lexer.advance_n(ch.len_utf8());
    MK_TOKEN!(TokenKind::Illegal, ch.to_string())
}

/// Drains a fresh lexer over `source`, including the trailing `EOF` token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
