use std::rc::Rc;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types a variable may hold: numbers, raw text,
/// and lists. Collections are reference-counted so that reading a list out
/// of the environment does not copy its elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A raw text value, produced by string literals.
    Text(String),
    /// A list of `Value` elements.
    List(Rc<Vec<Self>>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl Value {
    /// Coerces the value to a number.
    ///
    /// Numbers pass through unchanged. Text is parsed as a leading numeric
    /// prefix: `"12ab"` coerces to `12`, and a non-numeric prefix coerces to
    /// `0` — never an error. Lists have no numeric interpretation.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` when the value is a list.
    ///
    /// # Example
    /// ```
    /// use sigil::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(7.0).as_number(1).unwrap(), 7.0);
    /// assert_eq!(Value::from("12ab").as_number(1).unwrap(), 12.0);
    /// assert_eq!(Value::from("twelve").as_number(1).unwrap(), 0.0);
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => Ok(numeric_prefix(s)),
            Self::List(_) => {
                Err(RuntimeError::TypeError { details: "A list cannot be used as a number"
                                                  .to_string(),
                                              line })
            },
        }
    }
}

/// Parses the leading numeric prefix of a text value.
///
/// Accepts an optional leading `-`, then digits with at most one decimal
/// point. Anything that does not parse yields `0.0`.
fn numeric_prefix(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let start = usize::from(bytes.first() == Some(&b'-'));
    let mut end = start;
    let mut seen_dot = false;

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            },
            _ => break,
        }
    }

    text[..end].parse().unwrap_or(0.0)
}

impl std::fmt::Display for Value {
    /// Formats the value as its canonical text.
    ///
    /// Numbers with no fractional part print without one (`7`, not `7.0`),
    /// so the printed text re-parses to the same numeric value. Text prints
    /// verbatim; lists print as `[a, b, c]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::List(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
        }
    }
}
