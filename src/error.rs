/// Parsing errors.
///
/// Defines the error types that can occur while lexing and parsing a script of
/// builtin calls: unexpected tokens, unterminated strings, and reserved names
/// used as bindings.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types raised while evaluating builtins. These include
/// malformed numeric strings, values with no numeric representation, invalid
/// arguments, and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
