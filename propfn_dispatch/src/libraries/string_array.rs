//! `StringArray` library: instance methods on `Value::StrArr`.

use propfn_value::{errors, Value};

use crate::libraries::helpers::int_arg;
use crate::outcome::{none, ok, DispatchResult};
use crate::traits::InstanceLibrary;

pub struct StringArrayLibrary;

impl InstanceLibrary for StringArrayLibrary {
    fn exec_instance(&self, instance: &Value, name: &str, args: &[Value]) -> DispatchResult {
        let Value::StrArr(items) = instance else { return none() };
        if !name.eq_ignore_ascii_case("GetValue") || args.len() != 1 {
            return none();
        }
        let Some(index) = int_arg(args, 0) else { return none() };
        if index < 0 || index as usize >= items.len() {
            return Err(errors::index_out_of_range("GetValue", i64::from(index), items.len()));
        }
        ok(Value::Str(items[index as usize].clone()))
    }
}
