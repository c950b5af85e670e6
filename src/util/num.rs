/// Safely converts an `i64` to `u32` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds `u32::MAX`.
///
/// ## Example
/// ```
/// use numlib::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45, "out of range"), Ok(45));
/// assert_eq!(i64_to_u32_checked(-1, "out of range"), Err("out of range"));
/// assert_eq!(i64_to_u32_checked(i64::MAX, "out of range"), Err("out of range"));
/// ```
pub fn i64_to_u32_checked<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}
