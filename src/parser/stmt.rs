use crate::{
    ast::{
        ast::Statement,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_lookup, parser::Parser};

/// Parses one statement starting at the current token.
///
/// On return the cursor sits on the statement's last token, so a single
/// advance reaches the start of the next one.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    if let Some(handler) = stmt_lookup(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Statement::Expression(ExpressionStmt { token, expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = IdentifierExpr {
        token: parser.current_token().clone(),
        value: parser.current_token().literal.clone(),
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parse_stmt_terminator(parser)?;

    Some(Statement::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parse_stmt_terminator(parser)?;

    Some(Statement::Return(ReturnStmt { token, value }))
}

/// Moves onto a trailing `;`. Missing semicolons are only an error when
/// the parser requires them.
fn parse_stmt_terminator(parser: &mut Parser) -> Option<()> {
    if parser.options().require_semicolons {
        return parser.expect_peek(TokenKind::Semicolon);
    }

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(())
}

/// Parses `{ ... }` with the cursor on the opening brace, leaving it on the
/// closing one.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    if parser.current_token_kind() == TokenKind::EOF {
        parser.error(ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            found: TokenKind::EOF,
            token: parser.current_token().literal.clone(),
        });
    }

    BlockStmt { token, statements }
}
