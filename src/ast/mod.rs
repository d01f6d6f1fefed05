//! Abstract Syntax Tree (AST) definitions.
//!
//! This module defines the tree the parser produces:
//!
//! - `ast` - The `Node` trait, the `Statement` and `Expression` enums and `Program`
//! - `statements` - Let, return, expression and block statements
//! - `expressions` - Literals, operators, conditionals, calls and function literals
//!
//! Every node owns its children exclusively and keeps the token it was built
//! from for diagnostics.

pub mod ast;
pub mod expressions;
pub mod statements;
