/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer types
/// without risking silent truncation. Builtins use these for element counts.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or an error if the value is out of range.
pub mod num;
