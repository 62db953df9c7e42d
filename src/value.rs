use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{EvalError, EvalResult};

/// The mapping from variable name to resolved [`Value`] produced by a parse.
///
/// Bindings appear in declaration order. Rebinding a name overwrites the
/// previous value in place, so the last write wins while the original
/// position in the ordering is kept.
pub type Environment = IndexMap<String, Value>;

/// Represents a parsed trn datum.
///
/// This enum models all the types a trn value can take: integers, strings,
/// arrays, and keyed tables. Arrays and tables may nest arbitrarily. Every
/// value is exclusively owned by its container; referencing a bound variable
/// copies its value, so no sharing or cycles can occur.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A 64-bit signed integer, such as `42` or `-7`.
    Integer(i64),
    /// A string with its surrounding quotes stripped, such as `"Hello"`.
    String(String),
    /// An ordered array of values, such as `{ 1. 2. 3. }`.
    Array(Vec<Self>),
    /// A keyed table with insertion order preserved, such as
    /// `[key1 => 10, key2 => "value"]`.
    Table(IndexMap<String, Self>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl From<IndexMap<String, Self>> for Value {
    fn from(v: IndexMap<String, Self>) -> Self {
        Self::Table(v)
    }
}

impl Value {
    /// Converts the value to an `i64`, or returns an error if not an integer.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value.
    /// - `Err(EvalError::TypeMismatch)`: If the value is not an integer.
    ///
    /// # Example
    /// ```
    /// use trn::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_integer().unwrap(), 10);
    ///
    /// let s = Value::from("ten");
    /// assert!(s.as_integer().is_err());
    /// ```
    pub fn as_integer(&self) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(EvalError::TypeMismatch { details: format!("expected an integer, found {}",
                                                                self.kind()), }),
        }
    }

    /// Converts the value to a string slice, or returns an error if not a
    /// string.
    ///
    /// # Returns
    /// - `Ok(&str)`: The string contents.
    /// - `Err(EvalError::TypeMismatch)`: If the value is not a string.
    pub fn as_text(&self) -> EvalResult<&str> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(EvalError::TypeMismatch { details: format!("expected a string, found {}",
                                                                self.kind()), }),
        }
    }

    /// Returns the name of the value's kind, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "an integer",
            Self::String(_) => "a string",
            Self::Array(_) => "an array",
            Self::Table(_) => "a table",
        }
    }
}
