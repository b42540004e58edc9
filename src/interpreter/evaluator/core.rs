use std::{collections::HashMap, io::Write, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        native::{Arity, NativeFn, NativeRegistry},
        source::{FileProvider, SourceProvider},
        value::Value,
    },
    util::num::f64_to_index,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. There is one evaluation path and
/// one error policy: every runtime failure, division by zero included, flows
/// through this type.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the shared flat variable
/// environment, the user-defined function table, and the three collaborator
/// seams (native registry, source provider for imports, output sink for
/// `::print`). It is an explicit, injectable object, so tests can run
/// multiple independent programs without process-global state.
///
/// ## Usage
///
/// A `Context` is created once and reused across statements; the REPL-style
/// entry points in the crate root drive it.
pub struct Context {
    /// The shared flat name → value store.
    pub environment: Environment,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Redefining a name replaces the previous definition (last one wins).
    pub functions:   HashMap<String, FunctionDef>,
    natives: NativeRegistry,
    sources: Box<dyn SourceProvider>,
    output:  Box<dyn Write>,
}

impl Context {
    /// Creates a new evaluation context with an empty environment, no
    /// user-defined functions, an empty native registry, filesystem-backed
    /// imports, and stdout as the print sink.
    #[must_use]
    pub fn new() -> Self {
        Self { environment: Environment::new(),
               functions:   HashMap::new(),
               natives:     NativeRegistry::new(),
               sources:     Box::new(FileProvider),
               output:      Box::new(std::io::stdout()), }
    }

    /// Replaces the print sink. Tests inject a shared buffer here to capture
    /// output.
    #[must_use]
    pub fn with_output(mut self, output: Box<dyn Write>) -> Self {
        self.output = output;
        self
    }

    /// Replaces the source provider consumed by `import$`.
    #[must_use]
    pub fn with_source_provider(mut self, sources: Box<dyn SourceProvider>) -> Self {
        self.sources = sources;
        self
    }

    /// Registers a native function, extending the language without touching
    /// the core. Natives are consulted only for names absent from the
    /// user-defined function table.
    pub fn register_native(&mut self, name: &str, arity: Arity, func: NativeFn) {
        self.natives.register(name, arity, func);
    }

    pub(crate) fn natives(&self) -> &NativeRegistry {
        &self.natives
    }

    pub(crate) fn load_source(&self, path: &str) -> std::io::Result<String> {
        self.sources.load(path)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variables, binary
    /// operations, list literals, indexing, function calls, and blocks.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for
    /// constructs that do not yield one (e.g. a call to a function whose
    /// body produces nothing).
    ///
    /// # Errors
    /// Undefined variables, unknown functions, arity mismatches, division by
    /// zero, and index/type misuse are all fatal.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Number { value, .. } => Ok(Some(Value::Number(*value))),
            Expr::Str { value, .. } => Ok(Some(Value::Text(value.clone()))),
            Expr::Variable { name, line } => {
                self.environment
                    .get(name)
                    .cloned()
                    .map(Some)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let lhs = self.eval_to_value(left, *line)?;
                let rhs = self.eval_to_value(right, *line)?;
                Ok(Some(Self::eval_binary(*op, &lhs, &rhs, *line)?))
            },
            Expr::ListLiteral { elements, line } => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval_to_value(element, *line)?);
                }
                Ok(Some(Value::List(Rc::new(values))))
            },
            Expr::Index { target, index, line } => {
                Ok(Some(self.eval_index(target, index, *line)?))
            },
            Expr::Call { name,
                         arguments,
                         line, } => self.eval_call(name, arguments, *line),
            Expr::Block { statements, .. } => self.eval_block(statements),
        }
    }

    /// Evaluates an expression that must produce a value.
    ///
    /// # Errors
    /// `RuntimeError::MissingValue` when the expression yields nothing.
    pub(crate) fn eval_to_value(&mut self, expr: &Expr, line: usize) -> EvalResult<Value> {
        self.eval(expr)?.ok_or(RuntimeError::MissingValue { line })
    }

    /// Executes a single statement for its effects.
    ///
    /// Handles bindings, printing, conditionals, bounded loops, imports,
    /// function registration, and plain expression statements. Statements
    /// may modify the context or produce a value.
    ///
    /// # Returns
    /// `Some(Value)` for statements that yield a result (bindings yield the
    /// bound value, prints yield the printed value), or `None` when no value
    /// is produced.
    ///
    /// # Errors
    /// Propagates every runtime failure from the constructs it executes.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let { name, value, line } => {
                let value = self.eval_to_value(value, *line)?;
                self.environment.set(name, value.clone());
                Ok(Some(value))
            },
            Statement::Print { value, line } => {
                let value = self.eval_to_value(value, *line)?;
                let _ = writeln!(self.output, "{value}");
                Ok(Some(value))
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            line, } => {
                let condition = self.eval_to_value(condition, *line)?.as_number(*line)?;
                if condition != 0.0 {
                    self.eval_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.eval_statement(else_branch)
                } else {
                    Ok(None)
                }
            },
            Statement::Loop { var,
                              start,
                              end,
                              body,
                              line, } => self.eval_loop(var, start, end, body, *line),
            Statement::Import { path, line } => self.eval_import(path, *line),
            Statement::Function(def) => {
                self.functions.insert(def.name.clone(), def.clone());
                Ok(None)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }

    /// Executes the statements of a block in order.
    ///
    /// The block's value is the value of its last statement, or `None` for
    /// an empty block.
    pub(crate) fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<Option<Value>> {
        let mut last_value = None;
        for statement in statements {
            last_value = self.eval_statement(statement)?;
        }
        Ok(last_value)
    }

    /// Evaluates a list-indexing expression.
    ///
    /// The target must evaluate to a list and the index to a number, which
    /// is truncated to an integer.
    ///
    /// # Errors
    /// - `RuntimeError::TypeError` when the target is not a list or the
    ///   index is negative.
    /// - `RuntimeError::IndexOutOfBounds` when the index is past the end.
    fn eval_index(&mut self, target: &Expr, index: &Expr, line: usize) -> EvalResult<Value> {
        let target = self.eval_to_value(target, line)?;
        let index = self.eval_to_value(index, line)?.as_number(line)?;
        let index = f64_to_index(index, line)?;

        match target {
            Value::List(elements) => {
                elements.get(index)
                        .cloned()
                        .ok_or(RuntimeError::IndexOutOfBounds { max: elements.len()
                                                                         .saturating_sub(1),
                                                                found: index,
                                                                line })
            },
            other => Err(RuntimeError::TypeError { details: format!("Cannot index into {other}"),
                                                   line }),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
