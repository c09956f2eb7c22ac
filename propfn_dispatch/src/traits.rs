//! The two closed-polymorphism seams every library implements.
//!
//! Rather than an abstract base class with one subclass per receiver, the
//! router holds a fixed set of library singletons behind these two narrow
//! traits and picks among them with a `match` on the receiver identifier —
//! the id-to-function branch inside each library is, in turn, a `match` on
//! that library's own dense id enum (see [`crate::function_id`]).

use propfn_value::Value;

use crate::outcome::DispatchResult;

/// A library reachable without an instance (`Path.Combine(...)`,
/// `Math.Max(...)`, the `Intrinsic` namespace).
pub trait StaticLibrary {
    fn exec_static(&self, name: &str, args: &[Value]) -> DispatchResult;
}

/// A library reachable on an instance of a particular `Value` variant
/// (`"abc".StartsWith(...)`).
pub trait InstanceLibrary {
    fn exec_instance(&self, instance: &Value, name: &str, args: &[Value]) -> DispatchResult;

    /// Custom formatting for `ToString` calls that *do* take arguments
    /// (`Int.ToString("X4")`, `Version.ToString(2)`). The router handles the
    /// zero-argument case uniformly before ever reaching a library.
    fn exec_to_string(&self, _instance: &Value, _args: &[Value]) -> DispatchResult {
        Ok(None)
    }
}
