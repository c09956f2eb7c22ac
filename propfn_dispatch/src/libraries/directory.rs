//! `Directory` library (static only): `GetParent` hands back an opaque
//! directory-info handle rather than interpreting the platform's own type.

use propfn_value::{Opaque, Value};

use crate::libraries::helpers::str_arg;
use crate::outcome::{none, ok, DispatchResult};
use crate::traits::StaticLibrary;

/// The opaque payload behind a `Directory.GetParent` result. Just the
/// parent's path text — enough for the common case of a caller chaining
/// `.ToString()` or passing it straight to another path-taking call.
pub struct DirectoryInfo {
    pub full_name: String,
}

pub struct DirectoryLibrary;

impl StaticLibrary for DirectoryLibrary {
    fn exec_static(&self, name: &str, args: &[Value]) -> DispatchResult {
        if !name.eq_ignore_ascii_case("GetParent") || args.len() != 1 {
            return none();
        }
        let Some(path) = str_arg(args, 0) else { return none() };
        let parent = std::path::Path::new(path.as_ref())
            .parent()
            .map(|p| p.to_string_lossy().into_owned());
        match parent {
            Some(full_name) if !full_name.is_empty() => {
                ok(Value::Opaque(Opaque::new("System.IO.DirectoryInfo", DirectoryInfo { full_name })))
            }
            _ => Ok(Some(Value::Null)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_parent_returns_opaque_directory_info() {
        let r = DirectoryLibrary.exec_static("GetParent", &[Value::string("a/b/c")]).unwrap();
        let Some(Value::Opaque(o)) = r else { panic!("expected an opaque value") };
        assert_eq!(o.downcast_ref::<DirectoryInfo>().unwrap().full_name.replace('\\', "/"), "a/b");
    }

    #[test]
    fn get_parent_of_root_is_null() {
        let r = DirectoryLibrary.exec_static("GetParent", &[Value::string("c")]).unwrap();
        assert_eq!(r, Some(Value::Null));
    }
}
