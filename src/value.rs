//! Runtime value stub.
//!
//! The tagged values an evaluator would produce. Nothing here evaluates;
//! `from_literal` only lifts literal nodes into values.

use std::fmt;

use crate::ast::ast::Expression;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
}

impl Value {
    /// Tag name of the value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
        }
    }

    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Converts an integer or boolean literal node; anything else needs an
    /// evaluator and yields `None`.
    pub fn from_literal(expression: &Expression) -> Option<Value> {
        match expression {
            Expression::Integer(int) => Some(Value::Integer(int.value)),
            Expression::Boolean(boolean) => Some(Value::Boolean(boolean.value)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Null => write!(f, "null"),
        }
    }
}
