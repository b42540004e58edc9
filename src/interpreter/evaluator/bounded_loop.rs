use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
    util::num::{f64_to_i64_trunc, i64_to_f64_checked},
};

impl Context {
    /// Evaluates a bounded loop.
    ///
    /// The start and end expressions are evaluated numerically and truncated
    /// to integers; iteration runs **inclusively** from start to end. Before
    /// each body execution the loop variable is rebound in the shared flat
    /// environment, so it shadows any same-named variable and remains bound
    /// after the loop completes. A start greater than the end runs the body
    /// zero times.
    ///
    /// # Returns
    /// The value of the last body execution, or `None` when the loop ran
    /// zero times.
    ///
    /// # Errors
    /// Propagates bound-conversion failures and any error raised by the
    /// body.
    pub(crate) fn eval_loop(&mut self,
                            var: &str,
                            start: &Expr,
                            end: &Expr,
                            body: &Statement,
                            line: usize)
                            -> EvalResult<Option<Value>> {
        let start = self.eval_to_value(start, line)?.as_number(line)?;
        let end = self.eval_to_value(end, line)?.as_number(line)?;

        let start = f64_to_i64_trunc(start, line)?;
        let end = f64_to_i64_trunc(end, line)?;

        let mut last_value = None;
        for i in start..=end {
            let value = i64_to_f64_checked(i, RuntimeError::LiteralTooLarge { line })?;
            self.environment.set(var, Value::Number(value));
            last_value = self.eval_statement(body)?;
        }

        Ok(last_value)
    }
}
