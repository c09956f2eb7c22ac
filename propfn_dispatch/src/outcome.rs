//! The dispatcher's result type: match-with-value, or "not my department".

use propfn_value::{DispatchError, Value};

/// What a dispatch attempt produced.
///
/// `None` is not failure — it means the name, arity, or argument shapes
/// didn't match anything this dispatcher knows about, and the caller should
/// fall back to reflection. An `Err` means a row matched but the underlying
/// operation itself failed (overflow, bad format, I/O) and that failure must
/// propagate, never collapse into `None`.
pub type DispatchOutcome = Option<Value>;

pub type DispatchResult = Result<DispatchOutcome, DispatchError>;

/// Shorthand for "declined".
#[inline]
pub fn none() -> DispatchResult {
    Ok(None)
}

/// Shorthand for "matched, here's the value".
#[inline]
pub fn ok(value: Value) -> DispatchResult {
    Ok(Some(value))
}
