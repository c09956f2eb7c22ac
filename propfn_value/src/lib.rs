//! Value model and argument coercion for the property-function dispatcher.
//!
//! This crate provides:
//! - `Value`: the tagged union that crosses the dispatcher boundary
//! - `coerce`: the loose, total `to_*` conversion predicates argument
//!   matching is built from
//! - `DispatchError`: the single error type for operation failures that
//!   must propagate rather than collapse into "no match"
//!
//! # Architecture
//!
//! Coercion is deliberately separated from the value type itself: `Value`
//! only knows how to compare and display itself, while `coerce` holds every
//! rule for *accepting* a value as some other shape. That split lets each
//! per-library dispatch table embed exactly the coercions its own methods
//! need without `Value` growing a method per call site.

pub mod coerce;
pub mod enums;
pub mod errors;
mod value;

pub use enums::{EnumValue, HashAlgo, StringComparison};
pub use errors::DispatchError;
pub use value::{Guid, Opaque, Value, Version};
