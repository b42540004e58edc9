use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// Both operands are coerced numerically first: numbers pass through,
    /// text contributes its leading numeric prefix (`0` for a non-numeric
    /// prefix), lists are a type error. Comparison operators produce C-style
    /// boolean-as-number results: `1` for true, `0` for false.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` when dividing by zero. This is the
    ///   single crate-wide policy; no evaluation path lets a zero divisor
    ///   through.
    /// - `RuntimeError::TypeError` when an operand is a list.
    pub(crate) fn eval_binary(op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              line: usize)
                              -> EvalResult<Value> {
        let lhs = left.as_number(line)?;
        let rhs = right.as_number(line)?;

        let result = match op {
            BinaryOperator::Add => lhs + rhs,
            BinaryOperator::Sub => lhs - rhs,
            BinaryOperator::Mul => lhs * rhs,
            BinaryOperator::Div => {
                if rhs == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                lhs / rhs
            },
            BinaryOperator::Less => truth(lhs < rhs),
            BinaryOperator::Greater => truth(lhs > rhs),
            BinaryOperator::LessEqual => truth(lhs <= rhs),
            BinaryOperator::GreaterEqual => truth(lhs >= rhs),
            BinaryOperator::Equal => truth(lhs == rhs),
            BinaryOperator::NotEqual => truth(lhs != rhs),
        };

        Ok(Value::Number(result))
    }
}

/// Encodes a comparison result as a number: `1` for true, `0` for false.
const fn truth(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}
