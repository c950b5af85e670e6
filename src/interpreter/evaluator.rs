/// Core evaluation logic and context management.
///
/// Contains the evaluation engine for statements and expressions and the
/// runtime context holding `let` bindings.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides constants, reserved-name checks, arity checks, and negation.
pub mod utils;

/// Function evaluation.
///
/// Holds every builtin and the name/arity table used to dispatch calls.
pub mod function;
