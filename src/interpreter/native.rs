use std::collections::HashMap;

use crate::interpreter::{evaluator::core::EvalResult, value::Value};

/// Type alias for native function handlers.
///
/// A native receives a slice of evaluated argument values and the call-site
/// line number, and returns a value or a runtime error.
pub type NativeFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a native function.
#[derive(Clone, Copy)]
pub enum Arity {
    /// The native must receive exactly this many arguments.
    Exact(usize),
    /// The native accepts any number of arguments and checks them itself.
    Any,
}

/// A registered native function: its arity contract and its handler.
#[derive(Clone, Copy)]
pub struct NativeEntry {
    /// The arity contract checked by the evaluator before dispatch.
    pub arity: Arity,
    /// The handler invoked with the evaluated arguments.
    pub func:  NativeFn,
}

/// Registry of native functions contributed by external packages.
///
/// The evaluator consults this registry when a called name is absent from
/// the user-defined function table. The default registry is empty; embedders
/// populate it through [`NativeRegistry::register`].
///
/// # Example
/// ```
/// use sigil::interpreter::{
///     native::{Arity, NativeRegistry},
///     value::Value,
/// };
///
/// let mut registry = NativeRegistry::new();
/// registry.register("double", Arity::Exact(1), |args, line| {
///             Ok(Value::Number(args[0].as_number(line)? * 2.0))
///         });
///
/// assert!(registry.lookup("double").is_some());
/// assert!(registry.lookup("halve").is_none());
/// ```
#[derive(Default)]
pub struct NativeRegistry {
    entries: HashMap<String, NativeEntry>,
}

impl NativeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a native function under `name`. Registering an existing
    /// name replaces the previous entry.
    pub fn register(&mut self, name: &str, arity: Arity, func: NativeFn) {
        self.entries
            .insert(name.to_string(), NativeEntry { arity, func });
    }

    /// Looks up a native function by exact name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&NativeEntry> {
        self.entries.get(name)
    }
}
