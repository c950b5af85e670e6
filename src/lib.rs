//! # numlib
//!
//! numlib is a small set of numeric builtins meant to be exposed by a host
//! interpreter: permissive numeric coercion (`num`), a printing passthrough
//! (`print`), evenly spaced sequences (`linspace`) and the 3-vector cross
//! product (`cross`), plus a handful of math functions. A minimal script front
//! end drives the builtins from source text.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;
use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{LexerExtras, Token},
        parser::core::parse_statement,
        value::core::Value,
    },
};

/// Defines the structure of parsed scripts.
///
/// This module declares the `Expr` and `Statement` types built by the parser
/// and walked by the evaluator. Every node carries its source line for error
/// reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing, or
/// evaluating a builtin. Every error carries the line on which it occurred.
///
/// # Responsibilities
/// - Defines `ParseError` for the script front end.
/// - Defines `RuntimeError` for the builtins: malformed numeric strings, values
///   with no numeric representation, invalid arguments, and division by zero.
/// - Implements `Display` and `std::error::Error` for both.
pub mod error;
/// Ties together lexing, parsing, values, and the builtins.
///
/// # Responsibilities
/// - Exposes the builtin functions and the table hosts dispatch through.
/// - Provides the lexer, parser, and evaluator for scripts of builtin calls.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely narrow `i64` counts without silent truncation.
pub mod util;

/// Runs a script and returns the value of its last expression statement.
///
/// Each line holds one statement. Blank lines and `//` comments are skipped.
/// Execution stops at the first error.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use numlib::{evaluate, interpreter::value::core::Value};
///
/// let result = evaluate("let v = linspace(0, 1, 4)\nnum(\"7\")").unwrap();
/// assert_eq!(result, Some(Value::Integer(7)));
///
/// let result = evaluate("let x = 1").unwrap();
/// assert_eq!(result, None);
///
/// assert!(evaluate("num(\"abc\")").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut context = Context::new();

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;
            if slice.starts_with('"') {
                return Err(Box::new(ParseError::UnterminatedString { line }));
            }
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string(),
                                                              line }));
        }
    }
    debug!(tokens = tokens.len(), "lexed script");

    let mut iter = tokens.iter().peekable();

    let mut result = None;

    while iter.peek().is_some() {
        while let Some((Token::NewLine, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }
        let statement = parse_statement(&mut iter)?;
        if let Some(value) = context.eval_statement(&statement)? {
            result = Some(value);
        }
    }

    Ok(result)
}

/// Runs a script, optionally printing the value of its last expression.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use numlib::get_result;
///
/// let source = "let v = cross([1, 0, 0], [0, 1, 0])";
/// assert!(get_result(source, false).is_ok());
///
/// // 'w' is not defined
/// let source = "cross(w, [0, 1, 0])";
/// assert!(get_result(source, false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = evaluate(source)?;

    if auto_print && let Some(v) = result {
        println!("{v}");
    }

    Ok(())
}
