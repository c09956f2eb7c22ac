//! `Guid` library: `NewGuid` is static, `ToString(format)` is the custom
//! instance formatter.

use propfn_value::{Guid, Value};

use crate::libraries::helpers::str_arg;
use crate::outcome::{none, ok, DispatchResult};
use crate::traits::{InstanceLibrary, StaticLibrary};

pub struct GuidLibrary;

impl StaticLibrary for GuidLibrary {
    fn exec_static(&self, name: &str, args: &[Value]) -> DispatchResult {
        if name.eq_ignore_ascii_case("NewGuid") && args.is_empty() {
            return ok(Value::Guid(Guid::new_guid()));
        }
        none()
    }
}

impl InstanceLibrary for GuidLibrary {
    fn exec_instance(&self, _instance: &Value, _name: &str, _args: &[Value]) -> DispatchResult {
        none()
    }

    fn exec_to_string(&self, instance: &Value, args: &[Value]) -> DispatchResult {
        let Value::Guid(g) = instance else { return none() };
        if args.len() != 1 {
            return none();
        }
        let Some(format) = str_arg(args, 0) else { return none() };
        g.to_string_format(&format).map(|s| Some(Value::string(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_guid_returns_a_guid_value() {
        let r = GuidLibrary.exec_static("NewGuid", &[]).unwrap();
        assert!(matches!(r, Some(Value::Guid(_))));
    }

    #[test]
    fn to_string_n_format() {
        let g = Guid::parse("01234567-89ab-cdef-0123-456789abcdef").unwrap();
        let r = GuidLibrary.exec_to_string(&Value::Guid(g), &[Value::string("N")]);
        assert_eq!(r.unwrap(), Some(Value::string("0123456789abcdef0123456789abcdef")));
    }
}
