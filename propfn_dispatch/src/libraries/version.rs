//! `Version` library.

use propfn_value::Value;

use crate::libraries::helpers::{int_arg, str_arg};
use crate::outcome::{none, ok, DispatchResult};
use crate::traits::{InstanceLibrary, StaticLibrary};

pub struct VersionLibrary;

impl StaticLibrary for VersionLibrary {
    fn exec_static(&self, name: &str, args: &[Value]) -> DispatchResult {
        if !name.eq_ignore_ascii_case("Parse") || args.len() != 1 {
            return none();
        }
        let Some(s) = str_arg(args, 0) else { return none() };
        propfn_value::Version::parse(&s).map(|v| Some(Value::Ver(v)))
    }
}

impl InstanceLibrary for VersionLibrary {
    fn exec_instance(&self, instance: &Value, name: &str, args: &[Value]) -> DispatchResult {
        let Value::Ver(v) = instance else { return none() };
        if name.eq_ignore_ascii_case("CompareTo") && args.len() == 1 {
            return Ok(Some(Value::Int(compare_to(*v, &args[0]))));
        }
        if name.eq_ignore_ascii_case("Revision") && args.is_empty() {
            return ok(Value::Int(v.revision));
        }
        none()
    }

    fn exec_to_string(&self, instance: &Value, args: &[Value]) -> DispatchResult {
        let Value::Ver(v) = instance else { return none() };
        if args.len() != 1 {
            return none();
        }
        let Some(fields) = int_arg(args, 0) else { return none() };
        if fields < 0 {
            return none();
        }
        v.to_string_fields(fields as usize).map(|s| Some(Value::string(s)))
    }
}

fn compare_to(v: propfn_value::Version, other: &Value) -> i32 {
    match other {
        Value::Ver(o) => match v.cmp(o) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        },
        Value::Null => 1,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn to_string_matches_spec_scenario() {
        let v = Value::Ver(propfn_value::Version::new(1, 2, 3, 4));
        let r = VersionLibrary.exec_to_string(&v, &[Value::Int(2)]);
        assert_eq!(r.unwrap(), Some(Value::string("1.2")));
    }

    #[test]
    fn compare_to_null_is_greater() {
        let v = Value::Ver(propfn_value::Version::new(1, 0, -1, -1));
        let r = VersionLibrary.exec_instance(&v, "CompareTo", &[Value::Null]);
        assert_eq!(r.unwrap(), Some(Value::Int(1)));
    }

    #[test]
    fn parse_static() {
        let r = VersionLibrary.exec_static("Parse", &[Value::string("1.2.3")]);
        assert_eq!(
            r.unwrap(),
            Some(Value::Ver(propfn_value::Version::new(1, 2, 3, -1)))
        );
    }
}
