//! `Path` library (static only). Pure path-text manipulation — no file
//! system access except `GetTempPath`, which asks the OS for its temp
//! directory setting without touching any particular file.

use std::path::{Path, MAIN_SEPARATOR};

use propfn_value::coerce;
use propfn_value::Value;

use crate::libraries::helpers::str_opt_arg;
use crate::outcome::{none, ok, DispatchResult};
use crate::traits::StaticLibrary;

pub struct PathLibrary;

impl StaticLibrary for PathLibrary {
    fn exec_static(&self, name: &str, args: &[Value]) -> DispatchResult {
        if name.eq_ignore_ascii_case("Combine") {
            return combine(args);
        }
        if name.eq_ignore_ascii_case("DirectorySeparatorChar") && args.is_empty() {
            return ok(Value::Char(MAIN_SEPARATOR as u16));
        }
        if name.eq_ignore_ascii_case("GetFullPath") && args.len() == 1 {
            let Some(s) = coerce::to_string_ref(&args[0]) else { return none() };
            return ok(Value::string(get_full_path(&s)));
        }
        if name.eq_ignore_ascii_case("IsPathRooted") && args.len() == 1 {
            let Some(s) = str_opt_arg(args, 0) else { return none() };
            let rooted = s.is_some_and(|p| Path::new(p.as_ref()).is_absolute());
            return ok(Value::Bool(rooted));
        }
        if name.eq_ignore_ascii_case("GetTempPath") && args.is_empty() {
            return ok(Value::string(std::env::temp_dir().to_string_lossy().into_owned()));
        }
        if name.eq_ignore_ascii_case("GetFileName") && args.len() == 1 {
            let Some(s) = str_opt_arg(args, 0) else { return none() };
            return ok(Value::string(file_component(s.as_deref(), Component::FileName)));
        }
        if name.eq_ignore_ascii_case("GetDirectoryName") && args.len() == 1 {
            let Some(s) = str_opt_arg(args, 0) else { return none() };
            return ok(Value::string(file_component(s.as_deref(), Component::DirectoryName)));
        }
        if name.eq_ignore_ascii_case("GetFileNameWithoutExtension") && args.len() == 1 {
            let Some(s) = str_opt_arg(args, 0) else { return none() };
            return ok(Value::string(file_component(s.as_deref(), Component::FileStem)));
        }
        none()
    }
}

fn combine(args: &[Value]) -> DispatchResult {
    match args.len() {
        0 => ok(Value::string("")),
        2 | 3 | 4 => {
            let mut parts = Vec::with_capacity(args.len());
            for arg in args {
                let Some(s) = coerce::to_string_ref(arg) else { return none() };
                parts.push(s);
            }
            ok(Value::string(combine_parts(&parts)))
        }
        _ => {
            let Some(parts) = coerce::to_string_array_from_args(args) else { return none() };
            ok(Value::string(combine_parts(&parts)))
        }
    }
}

fn combine_parts(parts: &[std::sync::Arc<str>]) -> String {
    let mut result = std::path::PathBuf::new();
    for part in parts {
        let p = Path::new(part.as_ref());
        if p.is_absolute() {
            result = p.to_path_buf();
        } else {
            result.push(p);
        }
    }
    result.to_string_lossy().into_owned()
}

enum Component {
    FileName,
    DirectoryName,
    FileStem,
}

fn file_component(s: Option<&str>, which: Component) -> String {
    let Some(s) = s else { return String::new() };
    let p = Path::new(s);
    match which {
        Component::FileName => p.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default(),
        Component::DirectoryName => p
            .parent()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        Component::FileStem => p.file_stem().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default(),
    }
}

/// Lexically normalize a path against the current working directory —
/// resolves `.`/`..` segments without touching the file system, matching
/// the platform's documented behavior of not requiring the path to exist.
fn get_full_path(s: &str) -> String {
    let p = Path::new(s);
    let absolute = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(p)
    };
    let mut normalized = std::path::PathBuf::new();
    for component in absolute.components() {
        match component {
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized.to_string_lossy().into_owned()
}
