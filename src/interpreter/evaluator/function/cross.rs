use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Computes the cross product `a × b` of two 3-vectors.
///
/// The result is `[a1*b2 - a2*b1, a2*b0 - a0*b2, a0*b1 - a1*b0]`. Only the
/// first three components of each input are read.
///
/// When every component is an integer (booleans count as `0` and `1`), the
/// result holds integers computed with overflow checks. Otherwise all
/// components are promoted to reals.
///
/// # Errors
/// - `RuntimeError::ExpectedArray` if either input is not an array.
/// - `RuntimeError::InvalidArgument` if either input has fewer than three
///   components.
/// - `RuntimeError::ExpectedNumber` if a component is not numeric.
/// - `RuntimeError::Overflow` if integer arithmetic overflows.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::cross::cross, value::core::Value};
///
/// let x = Value::from(vec![1.into(), 0.into(), 0.into()]);
/// let y = Value::from(vec![0.into(), 1.into(), 0.into()]);
///
/// assert_eq!(cross(&x, &y, 1).unwrap().to_string(), "[0, 0, 1]");
/// ```
pub fn cross(a: &Value, b: &Value, line: usize) -> EvalResult<Value> {
    let a = first_three(a, "a", line)?;
    let b = first_three(b, "b", line)?;

    let product = if let (Some(a), Some(b)) = (integer_components(a), integer_components(b)) {
        integer_cross(&a, &b, line)?.map(Value::Integer)
    } else {
        real_cross(&real_components(a, line)?, &real_components(b, line)?).map(Value::Real)
    };

    Ok(Vec::from(product).into())
}

fn first_three<'v>(vector: &'v Value, name: &str, line: usize) -> EvalResult<&'v [Value]> {
    let components = vector.as_vec(line)?;
    if components.len() < 3 {
        return Err(RuntimeError::InvalidArgument { details: format!("cross expects '{name}' to have 3 components, found {}",
                                                                    components.len()),
                                                   line });
    }
    Ok(&components[..3])
}

fn integer_components(components: &[Value]) -> Option<[i64; 3]> {
    Some([components[0].as_integer()?,
          components[1].as_integer()?,
          components[2].as_integer()?])
}

fn real_components(components: &[Value], line: usize) -> EvalResult<[f64; 3]> {
    Ok([components[0].as_real(line)?,
        components[1].as_real(line)?,
        components[2].as_real(line)?])
}

fn integer_cross(a: &[i64; 3], b: &[i64; 3], line: usize) -> EvalResult<[i64; 3]> {
    let term = |x: i64, y: i64, z: i64, w: i64| {
        x.checked_mul(y)
         .zip(z.checked_mul(w))
         .and_then(|(xy, zw)| xy.checked_sub(zw))
         .ok_or(RuntimeError::Overflow { line })
    };

    Ok([term(a[1], b[2], a[2], b[1])?,
        term(a[2], b[0], a[0], b[2])?,
        term(a[0], b[1], a[1], b[0])?])
}

fn real_cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[1] * b[2] - a[2] * b[1],
     a[2] * b[0] - a[0] * b[2],
     a[0] * b[1] - a[1] * b[0]]
}

/// Builtin entry point for `cross(a, b)`.
pub fn cross_builtin(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("cross", args, 2, line)?;

    cross(&args[0], &args[1], line)
}
