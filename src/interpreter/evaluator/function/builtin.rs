use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Applies a unary real function to a numeric value.
///
/// The generated functions accept exactly one argument. Booleans and integers
/// are converted to reals first; the result is always a `Value::Real`.
/// Non-numeric arguments produce an `ExpectedNumber` error.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Real(std::f64::consts::PI / 2.0);
/// let r = sin(&[x], 1).unwrap();
///
/// assert_eq!(r, Value::Real(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 1, line)?;

            Ok(Value::Real(args[0].as_real(line)?.$real_fn()))
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(exp, exp);

/// Returns the square root of a non-negative number.
///
/// # Errors
/// Returns `InvalidArgument` for negative arguments.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::builtin::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::Integer(9)], 1).unwrap(), Value::Real(3.0));
/// assert!(sqrt(&[Value::Integer(-1)], 1).is_err());
/// ```
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("sqrt", args, 1, line)?;

    let x = args[0].as_real(line)?;
    if x < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("sqrt of negative number {x}"),
                                                   line });
    }
    Ok(Value::Real(x.sqrt()))
}

/// Returns the natural logarithm of a positive number.
///
/// # Errors
/// Returns `InvalidArgument` for zero or negative arguments.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::builtin::log, value::core::Value};
///
/// assert_eq!(log(&[Value::Integer(1)], 1).unwrap(), Value::Real(0.0));
/// assert!(log(&[Value::Integer(0)], 1).is_err());
/// ```
pub fn log(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("log", args, 1, line)?;

    let x = args[0].as_real(line)?;
    if x <= 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("log of non-positive number {x}"),
                                                   line });
    }
    Ok(Value::Real(x.ln()))
}

/// Returns the absolute value of a number.
///
/// Integers (and booleans) stay integers; reals stay reals.
///
/// # Errors
/// - `Overflow` for `abs(i64::MIN)`.
/// - `ExpectedNumber` for non-numeric arguments.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::builtin::abs, value::core::Value};
///
/// assert_eq!(abs(&[Value::Integer(-5)], 1).unwrap(), Value::Integer(5));
/// assert_eq!(abs(&[Value::Real(-2.5)], 1).unwrap(), Value::Real(2.5));
/// ```
pub fn abs(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("abs", args, 1, line)?;

    match &args[0] {
        Value::Real(r) => Ok(Value::Real(r.abs())),
        other => {
            let i = other.as_integer().ok_or(RuntimeError::ExpectedNumber { line })?;
            i.checked_abs()
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
        },
    }
}

/// Raises `base` to the power `exp`, as a real.
///
/// # Errors
/// - `DivisionByZero` when `base` is zero and `exp` is negative.
/// - `InvalidArgument` when a negative `base` is raised to a fractional
///   power.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::builtin::pow, value::core::Value};
///
/// assert_eq!(pow(&[Value::Integer(2), Value::Integer(10)], 1).unwrap(),
///            Value::Real(1024.0));
/// assert!(pow(&[Value::Integer(0), Value::Integer(-1)], 1).is_err());
/// ```
pub fn pow(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("pow", args, 2, line)?;

    let base = args[0].as_real(line)?;
    let exp = args[1].as_real(line)?;

    if base == 0.0 && exp < 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    if base < 0.0 && exp.is_finite() && exp.fract() != 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("pow of negative base {base} to fractional power {exp}"),
                                                   line });
    }
    Ok(Value::Real(base.powf(exp)))
}

/// Returns the four-quadrant arctangent of `a / b`, in radians.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::builtin::atan2, value::core::Value};
///
/// let r = atan2(&[Value::Integer(1), Value::Integer(0)], 1).unwrap();
/// assert_eq!(r, Value::Real(std::f64::consts::FRAC_PI_2));
/// ```
pub fn atan2(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("atan2", args, 2, line)?;

    Ok(Value::Real(args[0].as_real(line)?.atan2(args[1].as_real(line)?)))
}
