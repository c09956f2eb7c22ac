//! `Int` library: the one custom instance method, `ToString(format)`. The
//! zero-argument form is handled uniformly by the router (§4.5).

use propfn_value::{errors, DispatchError, Value};

use crate::libraries::helpers::str_arg;
use crate::outcome::{none, DispatchResult};
use crate::traits::InstanceLibrary;

pub struct IntLibrary;

impl InstanceLibrary for IntLibrary {
    fn exec_instance(&self, _instance: &Value, _name: &str, _args: &[Value]) -> DispatchResult {
        none()
    }

    fn exec_to_string(&self, instance: &Value, args: &[Value]) -> DispatchResult {
        let Value::Int(n) = instance else { return none() };
        if args.len() != 1 {
            return none();
        }
        let Some(format) = str_arg(args, 0) else { return none() };
        format_int(*n, &format).map(|s| Some(Value::string(s)))
    }
}

/// A minimal subset of .NET custom/standard numeric format strings:
/// `D`/`D<width>` (zero-padded decimal) and `X`/`X<width>`, `x`/`x<width>`
/// (zero-padded hex, case follows the letter).
fn format_int(n: i32, format: &str) -> Result<String, DispatchError> {
    let mut chars = format.chars();
    let Some(spec) = chars.next() else {
        return Ok(n.to_string());
    };
    let width: usize = chars.as_str().parse().unwrap_or(0);
    match spec {
        'D' | 'd' => Ok(format!("{n:0width$}", width = width)),
        'X' => Ok(format!("{:0width$X}", n, width = width)),
        'x' => Ok(format!("{:0width$x}", n, width = width)),
        _ => Err(errors::invalid_format("numeric format string", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_format_matches_spec_scenario() {
        let r = IntLibrary.exec_to_string(&Value::Int(42), &[Value::string("X4")]);
        assert_eq!(r.unwrap(), Some(Value::string("002A")));
    }

    #[test]
    fn unknown_format_propagates_error() {
        let r = IntLibrary.exec_to_string(&Value::Int(42), &[Value::string("Q")]);
        assert!(r.is_err());
    }

    #[test]
    fn zero_args_declines_to_router() {
        let r = IntLibrary.exec_to_string(&Value::Int(42), &[]);
        assert_eq!(r.unwrap(), None);
    }
}
