use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanExpr, CallExpr, FunctionLiteralExpr, IdentifierExpr, IfExpr, InfixExpr,
            IntegerExpr, PrefixExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{led_lookup, nud_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    parser.enter_nesting()?;
    let expr = parse_pratt(parser, bp);
    parser.exit_nesting();

    expr
}

fn parse_pratt(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = nud_lookup(token_kind) else {
        let token = parser.current_token().literal.clone();
        if token_kind == TokenKind::Illegal {
            parser.error(ErrorImpl::IllegalToken { token });
        } else {
            parser.error(ErrorImpl::NoPrefixRule {
                kind: token_kind,
                token,
            });
        }
        return None;
    };

    let mut left = nud(parser)?;

    // While the lookahead binds tighter than bp, fold it into lhs
    while parser.peek_binding_power() > bp {
        let Some(led) = led_lookup(parser.peek_token_kind()) else {
            return Some(left);
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();
    Some(Expression::Identifier(IdentifierExpr {
        value: token.literal.clone(),
        token,
    }))
}

/// Decimal integer literal. An out-of-range literal is reported but still
/// yields a node (with value 0) so the rest of the input gets parsed.
pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    let value = match token.literal.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            parser.error(ErrorImpl::NumberParseError {
                token: token.literal.clone(),
            });
            0
        }
    };

    Some(Expression::Integer(IntegerExpr { token, value }))
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();
    Some(Expression::Boolean(BooleanExpr {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expression::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

/// Binary operators are left-associative: the right operand is parsed at
/// the operator's own binding power, so an equal-power operator that follows
/// is left for the enclosing loop.
pub fn parse_infix_expr(parser: &mut Parser, left: Expression, bp: BindingPower) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Some(Expression::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Some(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expression> {
    // if (condition) { ... } else { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::CloseParen)?;
    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Some(Expression::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_literal_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser);

    Some(Expression::Function(FunctionLiteralExpr {
        token,
        parameters,
        body,
    }))
}

/// Parses `(a, b, c)` with the cursor on `(`, leaving it on `)`.
fn parse_fn_parameters(parser: &mut Parser) -> Option<Vec<IdentifierExpr>> {
    let mut parameters = Vec::new();

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Some(parameters);
    }

    loop {
        parser.expect_peek(TokenKind::Identifier)?;
        let token = parser.current_token().clone();
        parameters.push(IdentifierExpr {
            value: token.literal.clone(),
            token,
        });

        parser.advance();
        match parser.current_token_kind() {
            TokenKind::Comma => continue,
            TokenKind::CloseParen => return Some(parameters),
            _ => {
                let token = parser.current_token().literal.clone();
                parser.error(ErrorImpl::UnexpectedTokenDetailed {
                    token,
                    message: String::from("expected `,` or `)` in parameter list"),
                });
                return None;
            }
        }
    }
}

pub fn parse_call_expr(parser: &mut Parser, left: Expression, _bp: BindingPower) -> Option<Expression> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Some(Expression::Call(CallExpr {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

/// Parses the argument list with the cursor on `(`, leaving it on `)`.
fn parse_call_arguments(parser: &mut Parser) -> Option<Vec<Expression>> {
    let mut args = vec![];

    parser.advance();
    if parser.current_token_kind() == TokenKind::CloseParen {
        return Some(args);
    }

    args.push(parse_expr(parser, BindingPower::Lowest)?);
    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Some(args)
}
