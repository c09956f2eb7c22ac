//! `Regex` library (static only), backed by the `regex` crate.

use propfn_value::{errors, Opaque, Value};

use crate::libraries::helpers::str_arg;
use crate::outcome::{none, ok, DispatchResult};
use crate::traits::StaticLibrary;

/// The opaque payload behind a `Regex.Match` result.
pub struct RegexMatch {
    pub value: String,
    pub index: usize,
    pub success: bool,
}

pub struct RegexLibrary;

impl StaticLibrary for RegexLibrary {
    fn exec_static(&self, name: &str, args: &[Value]) -> DispatchResult {
        if name.eq_ignore_ascii_case("Escape") && args.len() == 1 {
            let Some(s) = str_arg(args, 0) else { return none() };
            return ok(Value::string(::regex::escape(&s)));
        }
        if name.eq_ignore_ascii_case("IsMatch") && args.len() == 2 {
            let Some(input) = str_arg(args, 0) else { return none() };
            let Some(pattern) = str_arg(args, 1) else { return none() };
            let re = compile(&pattern)?;
            return ok(Value::Bool(re.is_match(&input)));
        }
        if name.eq_ignore_ascii_case("Match") && args.len() == 2 {
            let Some(input) = str_arg(args, 0) else { return none() };
            let Some(pattern) = str_arg(args, 1) else { return none() };
            let re = compile(&pattern)?;
            return ok(Value::Opaque(match_to_opaque(&re, &input)));
        }
        if name.eq_ignore_ascii_case("Replace") && args.len() == 3 {
            let Some(input) = str_arg(args, 0) else { return none() };
            let Some(pattern) = str_arg(args, 1) else { return none() };
            let Some(replacement) = str_arg(args, 2) else { return none() };
            let re = compile(&pattern)?;
            return ok(Value::string(re.replace_all(&input, replacement.as_ref()).into_owned()));
        }
        none()
    }
}

fn compile(pattern: &str) -> Result<::regex::Regex, propfn_value::DispatchError> {
    ::regex::Regex::new(pattern).map_err(|e| errors::invalid_format("regular expression", &e.to_string()))
}

fn match_to_opaque(re: &::regex::Regex, input: &str) -> Opaque {
    match re.find(input) {
        Some(m) => Opaque::new(
            "System.Text.RegularExpressions.Match",
            RegexMatch {
                value: m.as_str().to_string(),
                index: m.start(),
                success: true,
            },
        ),
        None => Opaque::new(
            "System.Text.RegularExpressions.Match",
            RegexMatch {
                value: String::new(),
                index: 0,
                success: false,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn is_match_true_for_matching_pattern() {
        let r = RegexLibrary.exec_static("IsMatch", &[Value::string("hello123"), Value::string(r"\d+")]);
        assert_eq!(r.unwrap(), Some(Value::Bool(true)));
    }

    #[test]
    fn replace_substitutes_all_occurrences() {
        let r = RegexLibrary.exec_static(
            "Replace",
            &[Value::string("a1b2"), Value::string(r"\d"), Value::string("#")],
        );
        assert_eq!(r.unwrap(), Some(Value::string("a#b#")));
    }

    #[test]
    fn invalid_pattern_propagates_error() {
        let r = RegexLibrary.exec_static("IsMatch", &[Value::string("x"), Value::string("(")]);
        assert!(r.is_err());
    }

    #[test]
    fn escape_matches_regex_crate() {
        let r = RegexLibrary.exec_static("Escape", &[Value::string("a.b")]);
        assert_eq!(r.unwrap(), Some(Value::string(::regex::escape("a.b"))));
    }
}
