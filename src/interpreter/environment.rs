use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The mutable name → value store shared by all executing statements.
///
/// There is no nested scoping. Function parameters and loop variables bind
/// directly into this single table, shadowing and permanently overwriting any
/// same-named variable until explicitly rebound. That flat-namespace behavior
/// is deliberate and load-bearing for existing programs; imports run in the
/// same store, so a variable bound by an imported file is visible to the
/// importing file's subsequent statements.
///
/// The table grows on demand; there is no entry limit.
#[derive(Debug, Default)]
pub struct Environment {
    entries: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a binding. Rebinding an existing name replaces
    /// its value in place; the previous value is released.
    ///
    /// # Example
    /// ```
    /// use sigil::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Number(5.0));
    /// env.set("x", Value::Number(7.0));
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Number(7.0)));
    /// assert_eq!(env.len(), 1);
    /// ```
    pub fn set(&mut self, name: &str, value: Value) {
        self.entries.insert(name.to_string(), value);
    }

    /// Returns the current value bound to `name`, if any. The evaluator
    /// raises an unknown-variable error for `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Returns the number of bindings currently live.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no bindings exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
