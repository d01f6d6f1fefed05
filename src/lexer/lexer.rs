use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("lexer pattern must compile"),
            handler,
        }
    }
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \t\r\n]+").expect("whitespace pattern must compile");

    // Two-character operators come before their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^[a-zA-Z]+", symbol_handler),
        RegexPattern::new("^[0-9]+", number_handler),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new("^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
    ];
}

/// Pull-based scanner over one source string.
///
/// Each call to [`Lexer::next_token`] produces one token. Once the input is
/// exhausted every further call yields an `EOF` token with an empty literal.
/// Malformed input never fails here; unknown characters come out as
/// `Illegal` tokens for the parser to reject. Span offsets saturate at
/// `u32::MAX`, so sources past 4 GiB report clamped positions.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            source,
            file: file_name,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0));
        }

        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(self.remainder()) {
                let matched = matched.as_str().to_string();
                return (pattern.handler)(self, &matched);
            }
        }

        let illegal = self.at();
        self.emit(TokenKind::Illegal, illegal.to_string())
    }

    /// Creates a token spelled `literal` at the cursor and moves past it.
    pub fn emit(&mut self, kind: TokenKind, literal: String) -> Token {
        let len = literal.len();
        let token = MK_TOKEN!(kind, literal, self.span_of(len));
        self.advance_n(len);
        token
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(offset(self.pos), Rc::clone(&self.file)),
            end: Position(offset(self.pos + len), Rc::clone(&self.file)),
        }
    }
}

/// Positions are `u32` byte offsets; anything past `u32::MAX` is clamped to it.
pub(crate) fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Token {
    lexer.emit(TokenKind::Integer, matched.to_string())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Token {
    let kind = TokenKind::keyword(matched).unwrap_or(TokenKind::Identifier);
    lexer.emit(kind, matched.to_string())
}

/// Drains a fresh lexer into a vector ending in exactly one `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
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
