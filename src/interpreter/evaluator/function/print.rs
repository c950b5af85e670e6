use std::io::{self, Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Writes a value to `sink` and returns it unchanged.
///
/// The value is formatted using its `Display` implementation and followed by a
/// newline, in a single write. Every `Value` variant is printable.
///
/// # Errors
/// Returns `RuntimeError::Output` if the sink rejects the write.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::print::my_print, value::core::Value};
///
/// let mut sink = Vec::new();
/// let result = my_print(&Value::Integer(42), &mut sink, 1).unwrap();
///
/// assert_eq!(result, Value::Integer(42));
/// assert_eq!(sink, b"42\n");
/// ```
pub fn my_print<W: Write + ?Sized>(value: &Value, sink: &mut W, line: usize) -> EvalResult<Value> {
    let text = format!("{value}\n");

    sink.write_all(text.as_bytes())
        .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                            line })?;
    Ok(value.clone())
}

/// Prints a value to standard output and returns it unchanged.
///
/// Accepts exactly one argument.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// // The function prints the value to stdout, but the doctest
/// // only checks the returned result.
/// let result = print(&[Value::Integer(42)], 1).unwrap();
///
/// assert_eq!(result, 42.into());
/// ```
pub fn print(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("print", args, 1, line)?;

    my_print(&args[0], &mut io::stdout().lock(), line)
}
