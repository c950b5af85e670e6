/// The evaluator module runs statements and dispatches builtin calls.
///
/// The evaluator walks the AST, resolves variables and constants, evaluates
/// call arguments, and hands them to the builtin table. Every builtin lives
/// under `evaluator::function`.
///
/// # Responsibilities
/// - Implements `num`, `print`, `linspace`, `cross` and the math builtins.
/// - Checks arity and dispatches calls by name.
/// - Holds `let` bindings for the duration of a script.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// numbers, strings, booleans, identifiers, and punctuation. Line numbers are
/// tracked for error reporting.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// One statement is parsed per line: either a `let` binding or an expression
/// made of literals, arrays, names, negation, and builtin calls.
pub mod parser;
/// The value module defines the runtime data types passed to builtins.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `HostObject` capability.
/// - Provides checked conversions from values to reals and integers.
pub mod value;
