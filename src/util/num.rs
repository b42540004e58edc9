use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_SAFE_I64_INT`] in absolute
/// value.
///
/// ## Example
/// ```
/// use sigil::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_I64_INT + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Truncates an `f64` to an `i64`, rejecting values that cannot be
/// represented.
///
/// Bounded loops evaluate their start and end expressions numerically and
/// truncate the results to integers; this is the conversion they use.
///
/// ## Errors
/// - `RuntimeError::TypeError` for non-finite values.
/// - `RuntimeError::LiteralTooLarge` for values outside the `i64` range.
///
/// ## Example
/// ```
/// use sigil::util::num::f64_to_i64_trunc;
///
/// assert_eq!(f64_to_i64_trunc(3.9, 1).unwrap(), 3);
/// assert_eq!(f64_to_i64_trunc(-3.9, 1).unwrap(), -3);
/// assert!(f64_to_i64_trunc(1e20, 1).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_trunc(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeError { details: format!("Cannot convert non-finite value {value} to an integer"),
                                             line });
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(RuntimeError::LiteralTooLarge { line });
    }
    Ok(value.trunc() as i64)
}

/// Converts an `f64` to a list index, truncating the fractional part.
///
/// ## Errors
/// - `RuntimeError::TypeError` for negative or non-finite values.
/// - `RuntimeError::LiteralTooLarge` for values outside the index range.
pub fn f64_to_index(value: f64, line: usize) -> EvalResult<usize> {
    let index = f64_to_i64_trunc(value, line)?;
    if index < 0 {
        return Err(RuntimeError::TypeError { details: format!("List index must be non-negative, got {index}"),
                                             line });
    }
    usize::try_from(index).map_or(Err(RuntimeError::LiteralTooLarge { line }), Ok)
}
