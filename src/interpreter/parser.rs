/// Core parsing logic for statements and expressions.
///
/// Contains the entry points used by the interpreter: `parse_statement` for a
/// single line and `parse_expression` for a call, literal, or reference.
pub mod core;

/// Parsing utilities.
///
/// Shared helpers for comma-separated lists and identifiers.
pub mod utils;
