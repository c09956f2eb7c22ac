//! `Math` library (static only): `Max`/`Min`, integer preferred over double
//! when both arguments coerce.

use propfn_value::coerce;
use propfn_value::Value;

use crate::outcome::{none, ok, DispatchResult};
use crate::traits::StaticLibrary;

pub struct MathLibrary;

impl StaticLibrary for MathLibrary {
    fn exec_static(&self, name: &str, args: &[Value]) -> DispatchResult {
        if args.len() != 2 {
            return none();
        }
        if name.eq_ignore_ascii_case("Max") {
            return extreme(&args[0], &args[1], true);
        }
        if name.eq_ignore_ascii_case("Min") {
            return extreme(&args[0], &args[1], false);
        }
        none()
    }
}

fn extreme(a: &Value, b: &Value, want_max: bool) -> DispatchResult {
    if let (Some(x), Some(y)) = (coerce::to_int(a), coerce::to_int(b)) {
        let r = if want_max { x.max(y) } else { x.min(y) };
        return ok(Value::Int(r));
    }
    if let (Some(x), Some(y)) = (coerce::to_double(a), coerce::to_double(b)) {
        let r = if want_max { x.max(y) } else { x.min(y) };
        return ok(Value::Double(r));
    }
    none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn max_prefers_int_when_both_coerce() {
        let r = MathLibrary.exec_static("Max", &[Value::Int(3), Value::Int(7)]);
        assert_eq!(r.unwrap(), Some(Value::Int(7)));
    }

    #[test]
    fn min_falls_back_to_double() {
        let r = MathLibrary.exec_static("Min", &[Value::Double(1.5), Value::Int(2)]);
        assert_eq!(r.unwrap(), Some(Value::Double(1.5)));
    }
}
