//! Runtime value model for the property-function dispatcher.
//!
//! A tagged union carrying everything that can cross the dispatcher's
//! boundary: arguments coming in, results going out. Construction of the
//! heap-backed variants goes through factory methods on [`Value`], mirroring
//! the "only way in is through `Value::`" discipline used for heap variants
//! elsewhere in this codebase's lineage — it keeps the allocation strategy
//! (an `Arc` per string/array) in one place instead of scattered at call
//! sites.

use std::fmt;
use std::sync::Arc;

mod guid;
mod opaque;
mod version;

pub use guid::Guid;
pub use opaque::Opaque;
pub use version::Version;

/// Runtime value passed into and returned out of the dispatcher.
#[derive(Clone)]
pub enum Value {
    /// The absence of a value. Distinct from an empty string.
    Null,
    /// An immutable text string.
    Str(Arc<str>),
    /// An immutable sequence of strings.
    StrArr(Arc<[Arc<str>]>),
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer.
    Long(i64),
    /// 64-bit IEEE-754 floating point.
    Double(f64),
    /// A single UTF-16 code unit, for source compatibility with receivers
    /// that model `char` as 16 bits rather than a full Unicode scalar value.
    Char(u16),
    Bool(bool),
    /// A dotted version number; `build` and `revision` may be unset (-1).
    Ver(Version),
    Guid(Guid),
    /// A foreign-object handle passed through unchanged (file-system
    /// results, regex match objects, and the like).
    Opaque(Opaque),
}

impl Value {
    /// Build a `Str` value.
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Build a `StrArr` value from owned strings.
    #[inline]
    pub fn string_array(items: impl IntoIterator<Item = impl Into<Arc<str>>>) -> Self {
        let items: Arc<[Arc<str>]> = items.into_iter().map(Into::into).collect();
        Value::StrArr(items)
    }

    /// The name of this value's runtime type, used in error messages and
    /// in the reflection-fallback log's `ObjectInstanceType` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Str(_) => "System.String",
            Value::StrArr(_) => "System.String[]",
            Value::Int(_) => "System.Int32",
            Value::Long(_) => "System.Int64",
            Value::Double(_) => "System.Double",
            Value::Char(_) => "System.Char",
            Value::Bool(_) => "System.Boolean",
            Value::Ver(_) => "System.Version",
            Value::Guid(_) => "System.Guid",
            Value::Opaque(o) => o.kind,
        }
    }

    /// The default `ToString()` representation, used by the top-level
    /// router's uniform zero-argument `ToString` handling.
    pub fn default_to_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Str(s) => s.to_string(),
            Value::StrArr(items) => items.join(";"),
            Value::Int(n) => n.to_string(),
            Value::Long(n) => n.to_string(),
            Value::Double(d) => d.to_string(),
            Value::Char(c) => char_to_display(*c),
            Value::Bool(b) => b.to_string(),
            Value::Ver(v) => v.to_string(),
            Value::Guid(g) => g.to_string(),
            Value::Opaque(o) => format!("<{}>", o.kind),
        }
    }
}

/// Render a UTF-16 code unit for display, falling back to the replacement
/// character for lone surrogates that don't decode on their own.
pub(crate) fn char_to_display(c: u16) -> String {
    char::from_u32(u32::from(c))
        .map(String::from)
        .unwrap_or_else(|| '\u{FFFD}'.to_string())
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::StrArr(items) => write!(f, "StrArr({items:?})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Long(n) => write!(f, "Long({n})"),
            Value::Double(d) => write!(f, "Double({d})"),
            Value::Char(c) => write!(f, "Char({c})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Ver(v) => write!(f, "Ver({v})"),
            Value::Guid(g) => write!(f, "Guid({g})"),
            Value::Opaque(o) => write!(f, "Opaque({})", o.kind),
        }
    }
}

// Equality rules per the value model's §4.1: ordinal string equality,
// value-equality across the numeric variants, `Null` distinct from
// everything (including an empty string).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::{Bool, Char, Double, Guid, Int, Long, Null, Opaque, Str, StrArr, Ver};
        match (self, other) {
            (Null, Null) => true,
            (Str(a), Str(b)) => a.as_ref() == b.as_ref(),
            (StrArr(a), StrArr(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Char(a), Char(b)) => a == b,
            (Ver(a), Ver(b)) => a == b,
            (Guid(a), Guid(b)) => a == b,
            (Opaque(a), Opaque(b)) => a == b,
            // Numeric value-equality: coincide exactly across representations.
            (Int(a), Int(b)) => a == b,
            (Long(a), Long(b)) => a == b,
            (Double(a), Double(b)) => a == b,
            (Int(a), Long(b)) | (Long(b), Int(a)) => i64::from(*a) == *b,
            (Int(a), Double(b)) | (Double(b), Int(a)) => f64::from(*a) == *b,
            (Long(a), Double(b)) | (Double(b), Long(a)) => {
                #[allow(clippy::cast_precision_loss)]
                let a_as_f64 = *a as f64;
                a_as_f64 == *b && a_as_f64.trunc() == a_as_f64
            }
            _ => false,
        }
    }
}
