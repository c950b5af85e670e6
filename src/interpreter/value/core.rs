use std::rc::Rc;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::host_object::HostObject},
};

/// Represents a runtime value passed to and returned from builtins.
///
/// This enum models every kind of value a host can hand to a builtin. Only
/// booleans, integers, reals, and numeric strings are numeric in the sense of
/// `num`; arrays carry vectors and sequences.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A string value.
    Str(Rc<str>),
    /// An array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// The absence of a value.
    Nil,
    /// An opaque value owned by the host.
    Object(Rc<dyn HostObject>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Nil, Self::Nil) => true,
            (Self::Object(a), Self::Object(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Returns the name of the value's type, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use numlib::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "integer");
    /// assert_eq!(Value::Nil.type_name(), "nil");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Real(_) => "real",
            Self::Integer(_) => "integer",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
            Self::Nil => "nil",
            Self::Object(o) => o.type_name(),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real`, `Value::Integer` and `Value::Bool`. Booleans are
    /// treated as the integers `0` and `1`. Integers beyond `2^53` round to
    /// the nearest representable `f64`.
    ///
    /// # Example
    /// ```
    /// use numlib::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(42).unwrap(), 10.0);
    /// assert_eq!(Value::Bool(true).as_real(42).unwrap(), 1.0);
    /// assert_eq!(Value::Integer(i64::MAX).as_real(42).unwrap(), 9.223372036854775807e18);
    /// assert!(Value::from("10").as_real(42).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            Self::Bool(b) => Ok(f64::from(u8::from(*b))),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Converts the value to `i64` if it is integer-valued.
    ///
    /// Accepts `Value::Integer` and `Value::Bool`.
    ///
    /// # Returns
    /// - `Some(i64)`: The integer value.
    /// - `None`: If the value is not an integer or a boolean.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Borrows the elements of an array, or returns an error if the value is
    /// not an array.
    pub fn as_vec(&self, line: usize) -> EvalResult<&Vec<Self>> {
        match self {
            Self::Array(v) => Ok(v),
            _ => Err(RuntimeError::ExpectedArray { line }),
        }
    }

    /// Returns `true` if the value is [`Value::Real`].
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    /// Returns `true` if the value is [`Value::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Value::Array`].
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Nil => write!(f, "nil"),
            Self::Object(o) => write!(f, "{o}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Real(n) => (*n).into(),
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Str(s) => Self::Str(Rc::clone(s)),
            LiteralValue::Nil => Self::Nil,
        }
    }
}
