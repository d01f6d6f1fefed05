//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry points.
//! The parser pulls tokens from its own lexer and keeps one token of
//! lookahead (`current` + `peek`). Expressions go through a Pratt loop with
//! NUD/LED handlers looked up by token kind; statements are dispatched by
//! their leading token.
//!
//! Parsing never stops at the first error. Every failure is recorded and the
//! construct being built is dropped, so the result is always a best-effort
//! program plus the full list of errors.

use std::mem;

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_stmt,
};

/// Deepest expression nesting accepted before the statement is abandoned.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Grammar switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Require `;` after let and return statements. When off, a trailing
    /// `;` is consumed if present and otherwise the statement simply ends.
    pub require_semicolons: bool,
}

/// The main parser structure that maintains parsing state.
///
/// A parser owns its lexer and is good for exactly one pass over one source.
pub struct Parser {
    /// Token source
    lexer: Lexer,
    /// Token under the cursor
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors recorded so far, in source order
    errors: Vec<Error>,
    options: ParserOptions,
    /// Expressions currently being parsed, innermost included
    depth: usize,
}

impl Parser {
    /// Creates a parser positioned on the first token of the lexer's input.
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_options(lexer, ParserOptions::default())
    }

    pub fn with_options(mut lexer: Lexer, options: ParserOptions) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            options,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Shifts the lookahead into `current` and pulls a new lookahead.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    /// Advances onto the lookahead if it is `expected_kind`.
    ///
    /// Otherwise records an `UnexpectedToken` error at the lookahead and
    /// returns `None`, leaving the cursor where it was.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Option<()> {
        if self.peek.kind == expected_kind {
            self.advance();
            Some(())
        } else {
            let found = self.peek.clone();
            self.error_at(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: found.kind,
                    token: found.literal,
                },
                found.span.start,
            );
            None
        }
    }

    /// Binding power of the current token.
    pub fn current_binding_power(&self) -> BindingPower {
        binding_power(self.current.kind)
    }

    /// Binding power of the lookahead token.
    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    /// Enters one more level of expression nesting.
    ///
    /// Past `MAX_NESTING_DEPTH` records `NestingTooDeep` and returns `None`
    /// instead of recursing further.
    pub fn enter_nesting(&mut self) -> Option<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
            return None;
        }

        self.depth += 1;
        Some(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Records an error located at the current token.
    pub fn error(&mut self, error: ErrorImpl) {
        let position = self.get_position();
        self.error_at(error, position);
    }

    pub fn error_at(&mut self, error: ErrorImpl, position: Position) {
        debug!("parse error at {}: {}", position.0, error);
        self.errors.push(Error::new(error, position));
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses statements until end of input.
    pub fn parse_program(&mut self) -> Program {
        debug!("parsing {}", self.lexer.file());

        let mut program = Program::default();

        while self.current_token_kind() != TokenKind::EOF {
            if let Some(stmt) = parse_stmt(self) {
                trace!("parsed statement: {}", stmt);
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );

        program
    }

    /// Consumes the parser, returning the recorded errors.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

/// Outcome of a parse: the best-effort program and every recorded error.
///
/// Whether a non-empty error list invalidates the program is up to the
/// caller; `into_result` implements the strict policy.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub program: Program,
    pub errors: Vec<Error>,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rejects the whole program if any error was recorded.
    pub fn into_result(self) -> Result<Program, Vec<Error>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Parses source text into a Program.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// for `source` and runs a single pass to end of input. `file` names the
/// source in positions and defaults to `shell`.
pub fn parse(source: String, file: Option<String>) -> ParseResult {
    parse_with_options(source, file, ParserOptions::default())
}

pub fn parse_with_options(source: String, file: Option<String>, options: ParserOptions) -> ParseResult {
    let mut parser = Parser::with_options(Lexer::new(source, file), options);
    let program = parser.parse_program();

    ParseResult {
        program,
        errors: parser.into_errors(),
    }
}
