use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
    util::num::i64_to_u32_checked,
};

/// Largest number of elements `linspace` will produce.
pub const MAX_COUNT: u32 = 1 << 24;

/// Returns `n` evenly spaced reals from `start` towards `stop`.
///
/// Element `i` is `start + i * step` with `step = (stop - start) / n`, so the
/// first element is `start` and `stop` itself is never reached. A count of
/// zero yields an empty array. The elements are always reals, even for integer
/// bounds.
///
/// # Errors
/// - `RuntimeError::ExpectedNumber` if `start` or `stop` is not numeric.
/// - `RuntimeError::TypeError` if `n` is not an integer.
/// - `RuntimeError::InvalidArgument` if `n` is negative or above
///   [`MAX_COUNT`].
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::linspace::linspace, value::core::Value};
///
/// let r = linspace(&Value::Integer(0), &Value::Integer(10), &Value::Integer(5), 1).unwrap();
///
/// assert_eq!(r.to_string(), "[0, 2, 4, 6, 8]");
/// ```
pub fn linspace(start: &Value, stop: &Value, n: &Value, line: usize) -> EvalResult<Value> {
    let count = n.as_integer()
                 .ok_or_else(|| RuntimeError::TypeError { details: format!("linspace count must be an integer, found {}",
                                                                           n.type_name()),
                                                          line })?;
    if count < 0 {
        return Err(RuntimeError::InvalidArgument { details: format!("linspace count must not be negative, found {count}"),
                                                   line });
    }

    let too_many = || RuntimeError::InvalidArgument { details: format!("linspace count must be at most {MAX_COUNT}, found {count}"),
                                                      line };
    let count = i64_to_u32_checked(count, too_many())?;
    if count > MAX_COUNT {
        return Err(too_many());
    }

    let start = start.as_real(line)?;
    let stop = stop.as_real(line)?;

    if count == 0 {
        return Ok(Value::from(Vec::<Value>::new()));
    }

    let step = step(start, stop, count);

    let values = (0..count).map(|i| Value::Real(start + f64::from(i) * step))
                           .collect::<Vec<_>>();

    Ok(values.into())
}

/// Spacing between consecutive elements of a non-empty sequence.
fn step(start: f64, stop: f64, count: u32) -> f64 {
    debug_assert!(count > 0, "step of an empty linspace");

    (stop - start) / f64::from(count)
}

/// Builtin entry point for `linspace(start, stop, n)`.
pub fn linspace_builtin(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("linspace", args, 3, line)?;

    linspace(&args[0], &args[1], &args[2], line)
}
