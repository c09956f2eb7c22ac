//! Loose argument coercion.
//!
//! Each `to_*` function is total (success/failure, never panics) and pure:
//! the same `Value` always coerces to the same result. Coercion order
//! within a function is significant — the first arm that matches wins, and
//! later arms never run once an earlier one has (documented per function
//! below, matching §4.2 of the governing design).

use std::sync::Arc;

use crate::enums::EnumValue;
use crate::value::Value;

/// Accepts `Char` directly; accepts a `Str` of exactly one Unicode scalar
/// value that itself fits in a single UTF-16 code unit.
pub fn to_char(v: &Value) -> Option<u16> {
    match v {
        Value::Char(c) => Some(*c),
        Value::Str(s) => {
            let mut chars = s.chars();
            let only = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            u16::try_from(only as u32).ok()
        }
        _ => None,
    }
}

/// Accepts `Int`; accepts `Long` within `i32` range; accepts `Double` within
/// `i32` range whose truncation exactly equals the value; accepts `Str`
/// parsing as a plain (no separators, optional sign) base-10 integer.
pub fn to_int(v: &Value) -> Option<i32> {
    match v {
        Value::Int(n) => Some(*n),
        Value::Long(n) => i32::try_from(*n).ok(),
        Value::Double(d) => double_to_exact_int(*d).and_then(|n| i32::try_from(n).ok()),
        Value::Str(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// As `to_int`, widened to 64 bits.
pub fn to_long(v: &Value) -> Option<i64> {
    match v {
        Value::Int(n) => Some(i64::from(*n)),
        Value::Long(n) => Some(*n),
        Value::Double(d) => double_to_exact_int(*d),
        Value::Str(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// `Double` whose truncation toward zero exactly equals the value, returned
/// as the widened `i64` it represents exactly. `None` for non-integral,
/// out-of-range, `NaN`, or infinite values.
fn double_to_exact_int(d: f64) -> Option<i64> {
    if !d.is_finite() {
        return None;
    }
    let truncated = d.trunc();
    if truncated != d {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    if !(i64::MIN as f64..=i64::MAX as f64).contains(&truncated) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    Some(truncated as i64)
}

/// Accepts `Double` directly; accepts `Int`/`Long` by exact widening;
/// accepts `Str` parsing as a decimal-or-float value under invariant
/// formatting rules.
pub fn to_double(v: &Value) -> Option<f64> {
    match v {
        Value::Double(d) => Some(*d),
        Value::Int(n) => Some(f64::from(*n)),
        #[allow(clippy::cast_precision_loss)]
        Value::Long(n) => Some(*n as f64),
        Value::Str(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Accepts `Str` or `Null`. The outer `Option` is match/no-match; the inner
/// `Option` distinguishes an actual string from `Null`. Call sites opt into
/// this explicitly — most string parameters should use `to_string_ref`
/// instead and reject `Null`.
pub fn to_string_opt(v: &Value) -> Option<Option<Arc<str>>> {
    match v {
        Value::Str(s) => Some(Some(s.clone())),
        Value::Null => Some(None),
        _ => None,
    }
}

/// Accepts `Str` only (rejects `Null`).
pub fn to_string_ref(v: &Value) -> Option<Arc<str>> {
    match v {
        Value::Str(s) => Some(s.clone()),
        _ => None,
    }
}

pub fn to_bool(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        _ => None,
    }
}

/// Parses a `Str` into a named member of `E`. Rejects any string that also
/// parses as an integer (enum values must be spelled out, never given by
/// ordinal). Strips a `<namespace>.<type-name>.` prefix case-insensitively
/// before matching the bare member name ordinally.
pub fn to_enum<E: EnumValue>(v: &Value) -> Option<E> {
    let Value::Str(s) = v else { return None };
    if s.trim().parse::<i64>().is_ok() {
        return None;
    }
    let stripped = strip_enum_prefix::<E>(s);
    E::MEMBERS
        .iter()
        .find(|(name, _)| *name == stripped)
        .map(|(_, value)| *value)
}

fn strip_enum_prefix<E: EnumValue>(s: &str) -> &str {
    let namespace_prefix = format!("{}.", E::NAMESPACE);
    let rest = strip_prefix_ignore_case(s, &namespace_prefix).unwrap_or(s);
    let type_prefix = format!("{}.", E::TYPE_NAME);
    strip_prefix_ignore_case(rest, &type_prefix).unwrap_or(rest)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len() && s[..prefix.len()].eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Accepts a single `StrArr` value.
pub fn to_string_array(v: &Value) -> Option<Arc<[Arc<str>]>> {
    match v {
        Value::StrArr(items) => Some(items.clone()),
        _ => None,
    }
}

/// Accepts a uniform sequence of `Str` arguments (no nulls), used where a
/// method takes a variable-length tail of string arguments instead of a
/// single `StrArr` value (e.g. `Path.Combine`'s N-ary overload).
pub fn to_string_array_from_args(args: &[Value]) -> Option<Vec<Arc<str>>> {
    args.iter().map(to_string_ref).collect()
}

/// True iff the value is a `Double`, or a `Str` that parses as one.
pub fn is_floating_point_representation(v: &Value) -> bool {
    matches!(v, Value::Double(_)) || matches!(v, Value::Str(s) if s.trim().parse::<f64>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::StringComparison;
    use pretty_assertions::assert_eq;

    #[test]
    fn to_char_accepts_char_and_single_char_string() {
        assert_eq!(to_char(&Value::Char(b'x' as u16)), Some(b'x' as u16));
        assert_eq!(to_char(&Value::string("x")), Some(b'x' as u16));
        assert_eq!(to_char(&Value::string("xy")), None);
        assert_eq!(to_char(&Value::string("")), None);
    }

    #[test]
    fn to_int_rejects_non_integral_double() {
        assert_eq!(to_int(&Value::Double(3.0)), Some(3));
        assert_eq!(to_int(&Value::Double(3.5)), None);
    }

    #[test]
    fn to_int_rejects_out_of_range_long() {
        assert_eq!(to_int(&Value::Long(i64::from(i32::MAX) + 1)), None);
        assert_eq!(to_int(&Value::Long(42)), Some(42));
    }

    #[test]
    fn to_int_parses_string() {
        assert_eq!(to_int(&Value::string("42")), Some(42));
        assert_eq!(to_int(&Value::string("not a number")), None);
    }

    #[test]
    fn to_long_exact_double() {
        assert_eq!(to_long(&Value::Double(10.0)), Some(10));
        assert_eq!(to_long(&Value::Double(10.1)), None);
    }

    #[test]
    fn to_double_widens_int_and_long() {
        assert_eq!(to_double(&Value::Int(4)), Some(4.0));
        assert_eq!(to_double(&Value::Long(4)), Some(4.0));
    }

    #[test]
    fn to_string_opt_distinguishes_null_from_nomatch() {
        assert_eq!(to_string_opt(&Value::Null), Some(None));
        assert_eq!(to_string_opt(&Value::string("a")).unwrap().unwrap().as_ref(), "a");
        assert_eq!(to_string_opt(&Value::Int(1)), None);
    }

    #[test]
    fn to_enum_accepts_bare_and_qualified_names() {
        let bare = Value::string("OrdinalIgnoreCase");
        let qualified = Value::string("System.StringComparison.OrdinalIgnoreCase");
        assert_eq!(
            to_enum::<StringComparison>(&bare),
            Some(StringComparison::OrdinalIgnoreCase)
        );
        assert_eq!(
            to_enum::<StringComparison>(&qualified),
            Some(StringComparison::OrdinalIgnoreCase)
        );
    }

    #[test]
    fn to_enum_rejects_numeric_string() {
        assert_eq!(to_enum::<StringComparison>(&Value::string("5")), None);
    }

    #[test]
    fn to_enum_is_case_sensitive_on_bare_member_name() {
        assert_eq!(
            to_enum::<StringComparison>(&Value::string("ordinalignorecase")),
            None
        );
    }

    #[test]
    fn is_floating_point_representation_checks_double_or_parseable_string() {
        assert!(is_floating_point_representation(&Value::Double(1.5)));
        assert!(is_floating_point_representation(&Value::string("1.5")));
        assert!(!is_floating_point_representation(&Value::Int(1)));
        assert!(!is_floating_point_representation(&Value::string("abc")));
    }

    #[test]
    fn to_string_array_from_args_rejects_any_non_string() {
        let args = vec![Value::string("a"), Value::string("b")];
        assert_eq!(to_string_array_from_args(&args).unwrap().len(), 2);
        let bad = vec![Value::string("a"), Value::Null];
        assert_eq!(to_string_array_from_args(&bad), None);
    }
}
