use std::borrow::Cow;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Coerces a value into its numeric representation.
///
/// The cases are tried in a fixed order:
/// - `Bool` becomes the integer `1` or `0`. Booleans are matched before
///   integers.
/// - `Integer` and `Real` are returned unchanged.
/// - `Str` is parsed as an `i64` first, then as an `f64`; see
///   [`parse_numeric_literal`].
/// - Anything else is asked for its real-number conversion. Only host objects
///   can provide one.
///
/// # Errors
/// - `RuntimeError::NumberParse` if a string is neither an integer nor a float
///   literal.
/// - `RuntimeError::TypeCoercion` if the value has no numeric representation.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::num::num, value::core::Value};
///
/// assert_eq!(num(&Value::Bool(true), 1).unwrap(), Value::Integer(1));
/// assert_eq!(num(&Value::from("42"), 1).unwrap(), Value::Integer(42));
/// assert_eq!(num(&Value::from("2.5"), 1).unwrap(), Value::Real(2.5));
/// assert!(num(&Value::from("abc"), 1).is_err());
/// ```
pub fn num(value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Bool(b) => Ok(Value::Integer(i64::from(*b))),
        Value::Integer(i) => Ok(Value::Integer(*i)),
        Value::Real(r) => Ok(Value::Real(*r)),
        Value::Str(s) => parse_numeric_literal(s, line),
        other => coerce_to_real(other, line).map(Value::Real),
    }
}

/// Parses a string as an integer, falling back to a float.
///
/// The integer parse is strict: an optional sign followed by digits, with no
/// surrounding whitespace and no fractional part. Integers that do not fit in
/// an `i64` are read as floats instead. The float parse ignores surrounding
/// whitespace and accepts the usual decimal and exponent forms as well as `inf`
/// and `nan`. Both parses allow single `_` separators between digits.
///
/// # Errors
/// Returns `RuntimeError::NumberParse` if neither parse succeeds.
///
/// # Example
/// ```
/// use numlib::interpreter::{
///     evaluator::function::num::parse_numeric_literal, value::core::Value,
/// };
///
/// assert_eq!(parse_numeric_literal("-7", 1).unwrap(), Value::Integer(-7));
/// assert_eq!(parse_numeric_literal("1_000", 1).unwrap(), Value::Integer(1000));
/// assert_eq!(parse_numeric_literal("1e3", 1).unwrap(), Value::Real(1000.0));
/// assert_eq!(parse_numeric_literal(" 7", 1).unwrap(), Value::Real(7.0));
/// assert!(parse_numeric_literal("7 7", 1).is_err());
/// ```
pub fn parse_numeric_literal(text: &str, line: usize) -> EvalResult<Value> {
    if let Some(i) = strip_digit_separators(text).and_then(|digits| digits.parse::<i64>().ok()) {
        return Ok(Value::Integer(i));
    }

    strip_digit_separators(text.trim()).and_then(|digits| digits.parse::<f64>().ok())
                                       .map(Value::Real)
                                       .ok_or_else(|| RuntimeError::NumberParse { literal: text.to_string(),
                                                                                  line })
}

/// Removes `_` separators that sit between two ASCII digits.
///
/// Returns `None` if any separator is leading, trailing, doubled, or next to a
/// non-digit.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    let mut digits = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c != '_' {
            digits.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1);
        if !(before.is_some_and(|b| b.is_ascii_digit()) && after.is_some_and(u8::is_ascii_digit)) {
            return None;
        }
    }
    Some(Cow::Owned(digits))
}

/// Converts a non-primitive value through its numeric-conversion capability.
fn coerce_to_real(value: &Value, line: usize) -> EvalResult<f64> {
    let real = match value {
        Value::Object(object) => object.to_real(),
        _ => None,
    };

    real.ok_or_else(|| RuntimeError::TypeCoercion { type_name: value.type_name().to_string(),
                                                    line })
}

/// Builtin entry point for `num(value)`.
pub fn num_builtin(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("num", args, 1, line)?;

    num(&args[0], line)
}
