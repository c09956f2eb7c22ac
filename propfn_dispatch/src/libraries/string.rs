//! `String` library: static helpers plus the instance methods available on
//! any `Value::Str`.

use std::sync::{Arc, OnceLock};

use propfn_value::{errors, DispatchError, StringComparison, Value};

use crate::function_id::FunctionIdTable;
use crate::libraries::helpers::{char_arg, enum_arg, int_arg, str_arg, str_opt_arg};
use crate::outcome::{none, ok, DispatchResult};
use crate::traits::{InstanceLibrary, StaticLibrary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StaticId {
    IsNullOrEmpty,
    IsNullOrWhiteSpace,
    Copy,
    New,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InstanceId {
    StartsWith,
    EndsWith,
    Contains,
    Replace,
    ToUpperInvariant,
    ToLowerInvariant,
    ToLower,
    IndexOf,
    IndexOfAny,
    LastIndexOf,
    LastIndexOfAny,
    Length,
    Split,
    Substring,
    PadLeft,
    PadRight,
    Trim,
    TrimStart,
    TrimEnd,
    GetChars,
    Equals,
}

fn static_table() -> &'static FunctionIdTable<StaticId> {
    static TABLE: OnceLock<FunctionIdTable<StaticId>> = OnceLock::new();
    TABLE.get_or_init(|| {
        FunctionIdTable::build(&[
            ("IsNullOrEmpty", StaticId::IsNullOrEmpty),
            ("IsNullOrWhiteSpace", StaticId::IsNullOrWhiteSpace),
            ("Copy", StaticId::Copy),
            ("new", StaticId::New),
        ])
    })
}

fn instance_table() -> &'static FunctionIdTable<InstanceId> {
    static TABLE: OnceLock<FunctionIdTable<InstanceId>> = OnceLock::new();
    TABLE.get_or_init(|| {
        FunctionIdTable::build(&[
            ("StartsWith", InstanceId::StartsWith),
            ("EndsWith", InstanceId::EndsWith),
            ("Contains", InstanceId::Contains),
            ("Replace", InstanceId::Replace),
            ("ToUpperInvariant", InstanceId::ToUpperInvariant),
            ("ToLowerInvariant", InstanceId::ToLowerInvariant),
            ("ToLower", InstanceId::ToLower),
            ("IndexOf", InstanceId::IndexOf),
            ("IndexOfAny", InstanceId::IndexOfAny),
            ("LastIndexOf", InstanceId::LastIndexOf),
            ("LastIndexOfAny", InstanceId::LastIndexOfAny),
            ("Length", InstanceId::Length),
            ("Split", InstanceId::Split),
            ("Substring", InstanceId::Substring),
            ("PadLeft", InstanceId::PadLeft),
            ("PadRight", InstanceId::PadRight),
            ("Trim", InstanceId::Trim),
            ("TrimStart", InstanceId::TrimStart),
            ("TrimEnd", InstanceId::TrimEnd),
            ("get_Chars", InstanceId::GetChars),
            ("Equals", InstanceId::Equals),
        ])
    })
}

pub struct StringLibrary;

impl StaticLibrary for StringLibrary {
    fn exec_static(&self, name: &str, args: &[Value]) -> DispatchResult {
        let Some(id) = static_table().find(name) else {
            return none();
        };
        match (id, args.len()) {
            (StaticId::IsNullOrEmpty, 1) => {
                let Some(s) = str_opt_arg(args, 0) else { return none() };
                ok(Value::Bool(s.is_none_or_empty()))
            }
            (StaticId::IsNullOrWhiteSpace, 1) => {
                let Some(s) = str_opt_arg(args, 0) else { return none() };
                ok(Value::Bool(s.is_none_or_whitespace()))
            }
            (StaticId::Copy, 1) => {
                let Some(s) = str_arg(args, 0) else { return none() };
                ok(Value::Str(s))
            }
            (StaticId::New, 0) => ok(Value::string("")),
            (StaticId::New, 1) => {
                let Some(s) = str_arg(args, 0) else { return none() };
                ok(Value::Str(s))
            }
            _ => none(),
        }
    }
}

impl InstanceLibrary for StringLibrary {
    fn exec_instance(&self, instance: &Value, name: &str, args: &[Value]) -> DispatchResult {
        let Value::Str(s) = instance else { return none() };
        let Some(id) = instance_table().find(name) else {
            return none();
        };
        match (id, args.len()) {
            (InstanceId::StartsWith, 1) => {
                let Some(prefix) = str_arg(args, 0) else { return none() };
                ok(Value::Bool(s.starts_with(prefix.as_ref())))
            }
            (InstanceId::EndsWith, 1) => {
                let Some(suffix) = str_arg(args, 0) else { return none() };
                ok(Value::Bool(s.ends_with(suffix.as_ref())))
            }
            (InstanceId::EndsWith, 2) => {
                let Some(suffix) = str_arg(args, 0) else { return none() };
                let Some(cmp) = enum_arg::<StringComparison>(args, 1) else { return none() };
                ok(Value::Bool(ends_with_comparison(s, &suffix, cmp)))
            }
            (InstanceId::Contains, 1) => {
                let Some(needle) = str_arg(args, 0) else { return none() };
                ok(Value::Bool(s.contains(needle.as_ref())))
            }
            (InstanceId::Replace, 2) => {
                let Some(from) = str_arg(args, 0) else { return none() };
                let Some(to) = str_opt_arg(args, 1) else { return none() };
                let to = to.unwrap_or_else(|| Arc::from(""));
                ok(Value::string(s.replace(from.as_ref(), to.as_ref())))
            }
            (InstanceId::ToUpperInvariant, 0) => ok(Value::string(s.to_uppercase())),
            (InstanceId::ToLowerInvariant, 0) => ok(Value::string(s.to_lowercase())),
            (InstanceId::ToLower, 0) => ok(Value::string(s.to_lowercase())),
            (InstanceId::IndexOf, 1) => {
                let Some(needle) = str_arg(args, 0) else { return none() };
                ok(Value::Int(char_index_of(s, &needle, 0)))
            }
            (InstanceId::IndexOf, 2) => index_of_overload(name, s, args),
            (InstanceId::IndexOfAny, 1) => {
                let Some(set) = str_arg(args, 0) else { return none() };
                ok(Value::Int(index_of_any(s, &set, false)))
            }
            (InstanceId::LastIndexOf, 1) => {
                let Some(needle) = str_arg(args, 0) else { return none() };
                ok(Value::Int(last_index_of_from(s, &needle, s.chars().count())))
            }
            (InstanceId::LastIndexOf, 2) => last_index_of_overload(name, s, args),
            (InstanceId::LastIndexOfAny, 1) => {
                let Some(set) = str_arg(args, 0) else { return none() };
                ok(Value::Int(index_of_any(s, &set, true)))
            }
            (InstanceId::Length, 0) => ok(Value::Int(i32_len(s))),
            (InstanceId::Split, 1) => {
                let Some(sep) = char_arg(args, 0) else { return none() };
                let sep = char::from_u32(u32::from(sep)).unwrap_or('\u{FFFD}');
                ok(Value::string_array(s.split(sep).map(Arc::<str>::from)))
            }
            (InstanceId::Substring, 1) => {
                let Some(start) = int_arg(args, 0) else { return none() };
                substring(name, s, start, None)
            }
            (InstanceId::Substring, 2) => {
                let Some(start) = int_arg(args, 0) else { return none() };
                let Some(len) = int_arg(args, 1) else { return none() };
                substring(name, s, start, Some(len))
            }
            (InstanceId::PadLeft, 1) => {
                let Some(width) = int_arg(args, 0) else { return none() };
                pad(name, s, width, ' ', true)
            }
            (InstanceId::PadLeft, 2) => {
                let Some(width) = int_arg(args, 0) else { return none() };
                let Some(c) = char_arg(args, 1) else { return none() };
                pad(name, s, width, char::from_u32(u32::from(c)).unwrap_or(' '), true)
            }
            (InstanceId::PadRight, 1) => {
                let Some(width) = int_arg(args, 0) else { return none() };
                pad(name, s, width, ' ', false)
            }
            (InstanceId::PadRight, 2) => {
                let Some(width) = int_arg(args, 0) else { return none() };
                let Some(c) = char_arg(args, 1) else { return none() };
                pad(name, s, width, char::from_u32(u32::from(c)).unwrap_or(' '), false)
            }
            (InstanceId::Trim, 0) => ok(Value::string(s.trim())),
            (InstanceId::TrimStart, 1) => {
                let Some(set) = str_arg(args, 0) else { return none() };
                if set.is_empty() {
                    return none();
                }
                let chars: Vec<char> = set.chars().collect();
                ok(Value::string(s.trim_start_matches(chars.as_slice())))
            }
            (InstanceId::TrimEnd, 1) => {
                let Some(set) = str_arg(args, 0) else { return none() };
                if set.is_empty() {
                    return none();
                }
                let chars: Vec<char> = set.chars().collect();
                ok(Value::string(s.trim_end_matches(chars.as_slice())))
            }
            (InstanceId::GetChars, 1) => {
                let Some(index) = int_arg(args, 0) else { return none() };
                get_chars(name, s, index)
            }
            (InstanceId::Equals, 1) => {
                let Some(other) = str_opt_arg(args, 0) else { return none() };
                ok(Value::Bool(other.as_deref() == Some(s.as_ref())))
            }
            _ => none(),
        }
    }
}

fn index_of_overload(method: &str, s: &str, args: &[Value]) -> DispatchResult {
    let Some(needle) = str_arg(args, 0) else { return none() };
    if let Some(start) = int_arg(args, 1) {
        return index_of_from(method, s, &needle, start);
    }
    if let Some(cmp) = enum_arg::<StringComparison>(args, 1) {
        return ok(Value::Int(index_of_comparison(s, &needle, cmp)));
    }
    none()
}

fn last_index_of_overload(method: &str, s: &str, args: &[Value]) -> DispatchResult {
    let Some(needle) = str_arg(args, 0) else { return none() };
    if let Some(start) = int_arg(args, 1) {
        return last_index_of_from_checked(method, s, &needle, start);
    }
    if let Some(cmp) = enum_arg::<StringComparison>(args, 1) {
        let hay = if cmp.is_ignore_case() { s.to_lowercase() } else { s.to_string() };
        let ndl = if cmp.is_ignore_case() { needle.to_lowercase() } else { needle.to_string() };
        return ok(Value::Int(last_index_of_from(&hay, &ndl, hay.chars().count())));
    }
    none()
}

fn char_index_of(hay: &str, needle: &str, from: usize) -> i32 {
    let chars: Vec<char> = hay.chars().collect();
    if needle.is_empty() {
        return i32::try_from(from.min(chars.len())).unwrap_or(i32::MAX);
    }
    let needle_chars: Vec<char> = needle.chars().collect();
    for start in from..=chars.len().saturating_sub(needle_chars.len()) {
        if chars[start..].starts_with(needle_chars.as_slice()) {
            return i32::try_from(start).unwrap_or(-1);
        }
    }
    -1
}

fn index_of_from(method: &str, hay: &str, needle: &str, start: i32) -> DispatchResult {
    let len = hay.chars().count();
    if start < 0 || start as usize > len {
        return Err(errors::index_out_of_range(method, i64::from(start), len));
    }
    ok(Value::Int(char_index_of(hay, needle, start as usize)))
}

fn index_of_comparison(hay: &str, needle: &str, cmp: StringComparison) -> i32 {
    if cmp.is_ignore_case() {
        char_index_of(&hay.to_lowercase(), &needle.to_lowercase(), 0)
    } else {
        char_index_of(hay, needle, 0)
    }
}

fn last_index_of_from(hay: &str, needle: &str, upto: usize) -> i32 {
    let chars: Vec<char> = hay.chars().collect();
    let upto = upto.min(chars.len());
    if needle.is_empty() {
        return i32::try_from(upto).unwrap_or(-1);
    }
    let needle_chars: Vec<char> = needle.chars().collect();
    if needle_chars.len() > upto {
        return -1;
    }
    for start in (0..=upto - needle_chars.len()).rev() {
        if chars[start..].starts_with(needle_chars.as_slice()) {
            return i32::try_from(start).unwrap_or(-1);
        }
    }
    -1
}

/// `LastIndexOf(value, startIndex)` walks backward from `startIndex`; an
/// index beyond the final character is out of range.
fn last_index_of_from_checked(method: &str, hay: &str, needle: &str, start: i32) -> DispatchResult {
    let len = hay.chars().count();
    if start < 0 || (len > 0 && start as usize > len - 1) {
        return Err(errors::index_out_of_range(method, i64::from(start), len));
    }
    ok(Value::Int(last_index_of_from(hay, needle, start as usize + 1)))
}

fn index_of_any(hay: &str, set: &str, last: bool) -> i32 {
    let set_chars: Vec<char> = set.chars().collect();
    let chars: Vec<char> = hay.chars().collect();
    let positions = chars.iter().enumerate().filter(|(_, c)| set_chars.contains(c));
    if last {
        positions.last().map_or(-1, |(i, _)| i32::try_from(i).unwrap_or(-1))
    } else {
        positions
            .into_iter()
            .next()
            .map_or(-1, |(i, _)| i32::try_from(i).unwrap_or(-1))
    }
}

fn i32_len(s: &str) -> i32 {
    i32::try_from(s.chars().count()).unwrap_or(i32::MAX)
}

fn substring(method: &str, s: &str, start: i32, len: Option<i32>) -> DispatchResult {
    let chars: Vec<char> = s.chars().collect();
    if start < 0 || start as usize > chars.len() {
        return Err(errors::index_out_of_range(method, i64::from(start), chars.len()));
    }
    let start = start as usize;
    let take = match len {
        Some(l) if l < 0 => {
            return Err(errors::index_out_of_range(method, i64::from(l), chars.len()));
        }
        Some(l) => l as usize,
        None => chars.len() - start,
    };
    if start + take > chars.len() {
        return Err(errors::index_out_of_range(method, i64::from(start as i32 + take as i32), chars.len()));
    }
    ok(Value::string(chars[start..start + take].iter().collect::<String>()))
}

fn pad(method: &str, s: &str, width: i32, c: char, left: bool) -> DispatchResult {
    if width < 0 {
        return Err(DispatchError::new(format!("{method}: total width must be non-negative")));
    }
    let width = width as usize;
    let len = s.chars().count();
    if len >= width {
        return ok(Value::string(s));
    }
    let padding: String = std::iter::repeat(c).take(width - len).collect();
    let result = if left { format!("{padding}{s}") } else { format!("{s}{padding}") };
    ok(Value::string(result))
}

fn get_chars(method: &str, s: &str, index: i32) -> DispatchResult {
    let chars: Vec<char> = s.chars().collect();
    if index < 0 || index as usize >= chars.len() {
        return Err(errors::index_out_of_range(method, i64::from(index), chars.len()));
    }
    let c = chars[index as usize];
    let Ok(unit) = u16::try_from(c as u32) else {
        return Err(errors::operation_failed(format!(
            "{method}: character at index {index} does not fit in a single UTF-16 code unit"
        )));
    };
    ok(Value::Char(unit))
}

fn ends_with_comparison(s: &str, suffix: &str, cmp: StringComparison) -> bool {
    if cmp.is_ignore_case() {
        s.to_lowercase().ends_with(suffix.to_lowercase().as_str())
    } else {
        s.ends_with(suffix)
    }
}

trait OptStrExt {
    fn is_none_or_empty(&self) -> bool;
    fn is_none_or_whitespace(&self) -> bool;
}

impl OptStrExt for Option<Arc<str>> {
    fn is_none_or_empty(&self) -> bool {
        match self {
            None => true,
            Some(s) => s.is_empty(),
        }
    }

    fn is_none_or_whitespace(&self) -> bool {
        match self {
            None => true,
            Some(s) => s.trim().is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lib() -> StringLibrary {
        StringLibrary
    }

    #[test]
    fn starts_with_matches_spec_scenario() {
        let r = lib().exec_instance(&Value::string("MyTestString"), "StartsWith", &[Value::string("My")]);
        assert_eq!(r.unwrap(), Some(Value::Bool(true)));
    }

    #[test]
    fn equals_matches_spec_scenario() {
        let r = lib().exec_instance(
            &Value::string("MyTestString"),
            "Equals",
            &[Value::string("MyTestString")],
        );
        assert_eq!(r.unwrap(), Some(Value::Bool(true)));
    }

    #[test]
    fn ends_with_ordinal_ignore_case() {
        let r = lib().exec_instance(
            &Value::string("FOO"),
            "EndsWith",
            &[Value::string("foo"), Value::string("OrdinalIgnoreCase")],
        );
        assert_eq!(r.unwrap(), Some(Value::Bool(true)));
    }

    #[test]
    fn substring_out_of_range_is_an_error_not_none() {
        let r = lib().exec_instance(&Value::string("abc"), "Substring", &[Value::Int(1), Value::Int(10)]);
        assert!(r.is_err());
    }

    #[test]
    fn substring_bad_coercion_is_none() {
        let r = lib().exec_instance(&Value::string("abc"), "Substring", &[Value::string("x")]);
        assert_eq!(r.unwrap(), None);
    }

    #[test]
    fn unknown_method_is_none() {
        let r = lib().exec_instance(&Value::string("abc"), "Frobnicate", &[]);
        assert_eq!(r.unwrap(), None);
    }

    #[test]
    fn is_null_or_empty_treats_null_as_empty() {
        let r = lib().exec_static("IsNullOrEmpty", &[Value::Null]);
        assert_eq!(r.unwrap(), Some(Value::Bool(true)));
    }

    #[test]
    fn pad_left_grows_to_width() {
        let r = lib().exec_instance(&Value::string("7"), "PadLeft", &[Value::Int(3), Value::Char(b'0' as u16)]);
        assert_eq!(r.unwrap(), Some(Value::string("007")));
    }

    #[test]
    fn case_insensitive_method_name() {
        let a = lib().exec_instance(&Value::string("abc"), "startswith", &[Value::string("a")]);
        let b = lib().exec_instance(&Value::string("abc"), "STARTSWITH", &[Value::string("a")]);
        assert_eq!(a.unwrap(), b.unwrap());
    }
}
