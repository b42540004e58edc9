use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        native::Arity,
        value::Value,
    },
};

impl Context {
    /// Evaluates a function call.
    ///
    /// Lookup order: the user-defined function table is consulted by exact
    /// name; a name absent there is dispatched to the native registry; a
    /// name absent from both is an unknown-function error. Lookup and the
    /// arity check both happen before any argument is evaluated, so a bad
    /// call site reports the call-shape diagnostic even when an argument
    /// expression would itself fail.
    ///
    /// For a user-defined function the argument count must equal the
    /// parameter count exactly — a mismatch is fatal, never padded or
    /// truncated. Arguments are then evaluated left to right and each is
    /// bound to its parameter name directly in the shared flat environment,
    /// where it shadows and permanently overwrites any same-named caller
    /// variable; then the body statement is interpreted and its value
    /// returned.
    ///
    /// # Errors
    /// - `RuntimeError::ArgumentCountMismatch` reporting expected and actual
    ///   counts.
    /// - `RuntimeError::UnknownFunction` when neither table knows the name.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Option<Value>> {
        if let Some(def) = self.functions.get(name).cloned() {
            if arguments.len() != def.params.len() {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                 expected: def.params.len(),
                                                                 found: arguments.len(),
                                                                 line });
            }

            let arg_vals = self.eval_arguments(arguments, line)?;
            for (param, value) in def.params.iter().zip(arg_vals) {
                self.environment.set(param, value);
            }

            return self.eval_statement(&def.body);
        }

        let Some(entry) = self.natives().lookup(name).copied() else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       line });
        };
        if let Arity::Exact(expected) = entry.arity
           && arguments.len() != expected
        {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected,
                                                             found: arguments.len(),
                                                             line });
        }

        let arg_vals = self.eval_arguments(arguments, line)?;
        (entry.func)(&arg_vals, line).map(Some)
    }

    /// Evaluates call arguments left to right.
    fn eval_arguments(&mut self, arguments: &[Expr], line: usize) -> EvalResult<Vec<Value>> {
        let mut arg_vals = Vec::with_capacity(arguments.len());
        for argument in arguments {
            arg_vals.push(self.eval_to_value(argument, line)?);
        }
        Ok(arg_vals)
    }
}
