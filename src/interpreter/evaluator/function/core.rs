use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{builtin, cross, linspace, num, print},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
/// It returns the resulting value wrapped in `EvalResult`.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments the builtin takes,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in registration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "num"      => { arity: 1, func: num::num_builtin },
    "print"    => { arity: 1, func: print::print },
    "linspace" => { arity: 3, func: linspace::linspace_builtin },
    "cross"    => { arity: 2, func: cross::cross_builtin },
    "sin"      => { arity: 1, func: builtin::sin },
    "cos"      => { arity: 1, func: builtin::cos },
    "tan"      => { arity: 1, func: builtin::tan },
    "exp"      => { arity: 1, func: builtin::exp },
    "sqrt"     => { arity: 1, func: builtin::sqrt },
    "log"      => { arity: 1, func: builtin::log },
    "abs"      => { arity: 1, func: builtin::abs },
    "pow"      => { arity: 2, func: builtin::pow },
    "atan2"    => { arity: 2, func: builtin::atan2 },
}

/// Returns the number of arguments a builtin takes, or `None` if no builtin
/// has that name.
///
/// # Example
/// ```
/// use numlib::interpreter::evaluator::function::core::builtin_arity;
///
/// assert_eq!(builtin_arity("linspace"), Some(3));
/// assert_eq!(builtin_arity("nope"), None);
/// ```
#[must_use]
pub fn builtin_arity(name: &str) -> Option<usize> {
    BUILTIN_TABLE.iter().find(|b| b.name == name).map(|b| b.arity)
}

/// Calls a builtin by name.
///
/// This is the entry point a host uses to dispatch a call: the name is looked
/// up in the builtin table, the argument count is checked, and the handler is
/// invoked with the arguments unchanged.
///
/// # Errors
/// - `UnknownFunction` if no builtin has that name.
/// - `ArgumentCountMismatch` if the number of arguments is wrong.
/// - Any error raised by the builtin itself.
///
/// # Example
/// ```
/// use numlib::interpreter::{evaluator::function::core::call_builtin, value::core::Value};
///
/// let r = call_builtin("num", &[Value::from("12")], 1).unwrap();
/// assert_eq!(r, Value::Integer(12));
///
/// assert!(call_builtin("num", &[], 1).is_err());
/// ```
pub fn call_builtin(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let builtin =
        BUILTIN_TABLE.iter()
                     .find(|b| b.name == name)
                     .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                    line })?;

    if builtin.arity != args.len() {
        return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                         expected: builtin.arity,
                                                         found: args.len(),
                                                         line });
    }

    debug!(builtin = name, args = args.len(), line, "calling builtin");
    (builtin.func)(args, line)
}
