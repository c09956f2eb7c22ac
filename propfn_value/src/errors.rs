//! The dispatcher's single error type and its constructors.
//!
//! Centralizing the constructors here, the way the evaluator this crate is
//! descended from centralizes its own, keeps every call site's error
//! message consistent and makes future internationalization a matter of
//! changing one module instead of hunting through every library file.

use std::fmt;

/// An error from the underlying operation a dispatched call invoked:
/// overflow, a malformed format string, an I/O failure, and so on.
///
/// This is distinct from "the dispatcher declined the call" — that case
/// never constructs a `DispatchError`, it returns `DispatchOutcome::None`.
#[derive(Clone, Debug)]
pub struct DispatchError {
    pub message: String,
}

impl DispatchError {
    pub fn new(message: impl Into<String>) -> Self {
        DispatchError {
            message: message.into(),
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DispatchError {}

// Argument Validation Errors

#[cold]
pub fn wrong_arg_count(method: &str, expected: &str, got: usize) -> DispatchError {
    DispatchError::new(format!("{method} expects {expected} argument(s), got {got}"))
}

#[cold]
pub fn wrong_arg_type(method: &str, index: usize, expected: &str) -> DispatchError {
    DispatchError::new(format!(
        "{method} argument {index} could not be coerced to {expected}"
    ))
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> DispatchError {
    DispatchError::new("division by zero")
}

#[cold]
pub fn modulo_by_zero() -> DispatchError {
    DispatchError::new("modulo by zero")
}

#[cold]
pub fn arithmetic_overflow(operation: &str) -> DispatchError {
    DispatchError::new(format!("arithmetic overflow in {operation}"))
}

// Format / Parse Errors

#[cold]
pub fn invalid_format(what: &str, value: &str) -> DispatchError {
    DispatchError::new(format!("'{value}' is not a valid {what}"))
}

// Range / Operation Errors
//
// These back calls where the underlying operation itself fails rather than
// the dispatcher declining the call — the distinction the router relies on
// to propagate instead of returning `None` (out-of-range indices, malformed
// base-64, and the like are legitimate application errors, not "unknown
// method").

#[cold]
pub fn index_out_of_range(method: &str, index: i64, len: usize) -> DispatchError {
    DispatchError::new(format!(
        "{method}: index {index} is out of range for a value of length {len}"
    ))
}

#[cold]
pub fn operation_failed(message: impl Into<String>) -> DispatchError {
    DispatchError::new(message.into())
}
