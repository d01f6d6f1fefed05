//! Precedence and dispatch tables.
//!
//! The tables are plain functions over `TokenKind`. The NUD and LED tables
//! match every kind explicitly, so adding a token kind without deciding its
//! handlers is a compile error.

use crate::{
    ast::ast::{Expression, Statement},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding strength, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Option<Statement>;
pub type NUDHandler = fn(&mut Parser) -> Option<Expression>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Option<Expression>;

/// Binding power of a token in infix position. Kinds that never combine
/// with a left operand bind at `Lowest`.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Sum,
        TokenKind::Star | TokenKind::Slash => BindingPower::Product,
        TokenKind::OpenParen => BindingPower::Call,
        _ => BindingPower::Lowest,
    }
}

pub fn stmt_lookup(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Let => Some(parse_let_stmt),
        TokenKind::Return => Some(parse_return_stmt),
        _ => None,
    }
}

pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        // Literals and symbols
        TokenKind::Identifier => Some(parse_identifier_expr),
        TokenKind::Integer => Some(parse_integer_expr),
        TokenKind::True | TokenKind::False => Some(parse_boolean_expr),

        // Unary
        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),

        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::If => Some(parse_if_expr),
        TokenKind::Fn => Some(parse_fn_literal_expr),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Plus
        | TokenKind::Slash
        | TokenKind::Star
        | TokenKind::Let
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        // Relational
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater => Some(parse_infix_expr),

        // Additive and multiplicative
        TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash => {
            Some(parse_infix_expr)
        }

        TokenKind::OpenParen => Some(parse_call_expr),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Integer
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Fn
        | TokenKind::Let
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Return => None,
    }
}
