use std::fmt::{Debug, Display};

/// An opaque value owned by the embedding host.
///
/// Hosts wrap their own types in [`Value::Object`](super::core::Value::Object)
/// to pass them through builtins. The only capability the builtins rely on is
/// [`HostObject::to_real`]; everything else is up to the host.
///
/// # Example
/// ```
/// use std::{fmt, rc::Rc};
///
/// use numlib::interpreter::value::{core::Value, host_object::HostObject};
///
/// #[derive(Debug)]
/// struct Meters(f64);
///
/// impl fmt::Display for Meters {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{} m", self.0)
///     }
/// }
///
/// impl HostObject for Meters {
///     fn type_name(&self) -> &str {
///         "meters"
///     }
///
///     fn to_real(&self) -> Option<f64> {
///         Some(self.0)
///     }
/// }
///
/// let v = Value::Object(Rc::new(Meters(2.5)));
/// assert_eq!(v.to_string(), "2.5 m");
/// ```
pub trait HostObject: Debug + Display {
    /// Name of the type, used in error messages.
    fn type_name(&self) -> &str;

    /// Converts the object to a real number, if it has a numeric meaning.
    ///
    /// The default implementation returns `None`.
    fn to_real(&self) -> Option<f64> {
        None
    }
}
