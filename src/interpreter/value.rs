/// Host object support.
///
/// Defines the `HostObject` trait for opaque values supplied by an embedding
/// host. An object may expose a conversion to a real number, which is what
/// `num` falls back to for values that are not booleans, numbers, or strings.
pub mod host_object;

pub mod core;
