use std::f64::consts;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Named constants available to scripts.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI), ("e", consts::E)];

/// Looks up a named constant.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::utils::constant, value::core::Value};
///
/// assert_eq!(constant("pi"), Some(Value::Real(std::f64::consts::PI)));
/// assert_eq!(constant("tau"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<Value> {
    CONSTANTS.iter()
             .find(|(n, _)| *n == name)
             .map(|(_, v)| Value::Real(*v))
}

/// Checks whether an identifier is reserved by the language.
///
/// Reserved identifiers are the builtin function names and the named
/// constants. They cannot be bound with `let`.
///
/// # Example
/// ```
/// use numlib::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("cross"));
/// assert!(is_reserved_identifier("pi"));
/// assert!(!is_reserved_identifier("velocity"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    use crate::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS;

    BUILTIN_FUNCTIONS.contains(&name) || CONSTANTS.iter().any(|(n, _)| *n == name)
}

/// Ensures a builtin received exactly `expected` arguments.
///
/// # Errors
/// Returns `ArgumentCountMismatch` naming the builtin otherwise.
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  expected,
                                                  found: args.len(),
                                                  line })
    }
}

/// Negates a numeric value.
///
/// Integers are negated with overflow checks, booleans become the integers `0`
/// or `-1`, and reals are negated directly.
///
/// # Errors
/// - `Overflow` when negating `i64::MIN`.
/// - `ExpectedNumber` for non-numeric values.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::utils::negate, value::core::Value};
///
/// assert_eq!(negate(&Value::Integer(3), 1).unwrap(), Value::Integer(-3));
/// assert_eq!(negate(&Value::Real(1.5), 1).unwrap(), Value::Real(-1.5));
/// ```
pub fn negate(value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Real(r) => Ok(Value::Real(-r)),
        other => {
            let i = other.as_integer().ok_or(RuntimeError::ExpectedNumber { line })?;
            i.checked_neg()
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
        },
    }
}
