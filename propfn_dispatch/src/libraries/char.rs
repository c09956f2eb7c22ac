//! `Char` library (static only).

use propfn_value::{errors, Value};

use crate::libraries::helpers::{char_arg, int_arg, str_arg};
use crate::outcome::{none, ok, DispatchResult};
use crate::traits::StaticLibrary;

pub struct CharLibrary;

impl StaticLibrary for CharLibrary {
    fn exec_static(&self, name: &str, args: &[Value]) -> DispatchResult {
        if !name.eq_ignore_ascii_case("IsDigit") {
            return none();
        }
        match args.len() {
            1 => {
                let Some(c) = char_arg(args, 0) else { return none() };
                let is_digit = char::from_u32(u32::from(c)).is_some_and(|c| c.is_ascii_digit());
                ok(Value::Bool(is_digit))
            }
            2 => {
                let Some(s) = str_arg(args, 0) else { return none() };
                let Some(index) = int_arg(args, 1) else { return none() };
                let chars: Vec<char> = s.chars().collect();
                if index < 0 || index as usize >= chars.len() {
                    return Err(errors::index_out_of_range("IsDigit", i64::from(index), chars.len()));
                }
                ok(Value::Bool(chars[index as usize].is_ascii_digit()))
            }
            _ => none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn is_digit_on_string_matches_spec_scenario() {
        let r = CharLibrary.exec_static("IsDigit", &[Value::string("7")]);
        assert_eq!(r.unwrap(), Some(Value::Bool(true)));
    }

    #[test]
    fn is_digit_with_index_matches_spec_scenario() {
        let r = CharLibrary.exec_static("IsDigit", &[Value::string("ab"), Value::Int(1)]);
        assert_eq!(r.unwrap(), Some(Value::Bool(false)));
    }
}
