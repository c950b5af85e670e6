/// Math builtins.
///
/// Trigonometric, exponential, and power functions over real numbers, plus
/// `abs`.
pub mod builtin;
/// The `cross` function implementation.
///
/// Computes the cross product of two 3-vectors.
pub mod cross;
/// The `linspace` function implementation.
///
/// Produces evenly spaced reals over a half-open interval.
pub mod linspace;
/// The `num` function implementation.
///
/// Coerces booleans, numbers, numeric strings, and host objects into an
/// integer or a real.
pub mod num;
/// The `print` function implementation.
///
/// Writes a value to an output sink and returns it unchanged.
pub mod print;

pub mod core;
