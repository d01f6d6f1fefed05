//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns source text into
//! tokens, one at a time. It handles:
//!
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Token position tracking for error reporting
//! - Whitespace skipping
//! - Degrading unknown characters into `Illegal` tokens

pub mod lexer;
pub mod tokens;
