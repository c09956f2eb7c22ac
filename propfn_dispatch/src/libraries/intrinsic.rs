//! `Intrinsic` library (static only): the build-system-specific namespace
//! that doesn't correspond to any platform type. The largest library by
//! method count, so it's organized into sections mirroring the method
//! groups rather than one flat `match`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use propfn_value::{coerce, errors, HashAlgo, Value, Version};

use crate::collab::{Collaborators, FeatureAvailability};
use crate::config::DispatcherConfig;
use crate::libraries::helpers::{enum_arg, int_arg, str_arg, str_opt_arg};
use crate::outcome::{none, ok, DispatchResult};
use crate::traits::StaticLibrary;

pub struct IntrinsicLibrary {
    pub collaborators: Collaborators,
    pub config: DispatcherConfig,
}

impl StaticLibrary for IntrinsicLibrary {
    fn exec_static(&self, name: &str, args: &[Value]) -> DispatchResult {
        if let Some(r) = arithmetic(name, args) {
            return r;
        }
        if let Some(r) = bitwise(name, args) {
            return r;
        }
        if let Some(r) = path_helpers(name, args) {
            return r;
        }
        if let Some(r) = string_helpers(name, args) {
            return r;
        }
        if let Some(r) = version_predicates(name, args) {
            return r;
        }
        if let Some(r) = target_framework_helpers(name, args) {
            return r;
        }
        if let Some(r) = self.hashing(name, args) {
            return r;
        }
        if let Some(r) = self.feature_gates(name, args) {
            return r;
        }
        if let Some(r) = self.os_and_file_system(name, args) {
            return r;
        }
        if let Some(r) = self.environment(name, args) {
            return r;
        }
        none()
    }
}

// Arithmetic — integer-before-float widening (§4.4.11, §8 property 9): if
// both arguments coerce to `Long`, the `Long` overload runs; otherwise both
// must coerce to `Double`. Never a mixed result.

fn arithmetic(name: &str, args: &[Value]) -> Option<DispatchResult> {
    let op = if name.eq_ignore_ascii_case("Add") {
        ArithOp::Add
    } else if name.eq_ignore_ascii_case("Subtract") {
        ArithOp::Subtract
    } else if name.eq_ignore_ascii_case("Multiply") {
        ArithOp::Multiply
    } else if name.eq_ignore_ascii_case("Divide") {
        ArithOp::Divide
    } else if name.eq_ignore_ascii_case("Modulo") {
        ArithOp::Modulo
    } else {
        return None;
    };
    if args.len() != 2 {
        return Some(none());
    }
    Some(apply_arithmetic(op, &args[0], &args[1]))
}

#[derive(Clone, Copy)]
enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

fn apply_arithmetic(op: ArithOp, a: &Value, b: &Value) -> DispatchResult {
    if let (Some(x), Some(y)) = (coerce::to_long(a), coerce::to_long(b)) {
        return long_arithmetic(op, x, y);
    }
    if let (Some(x), Some(y)) = (coerce::to_double(a), coerce::to_double(b)) {
        return double_arithmetic(op, x, y);
    }
    none()
}

fn long_arithmetic(op: ArithOp, x: i64, y: i64) -> DispatchResult {
    let result = match op {
        ArithOp::Add => x.checked_add(y),
        ArithOp::Subtract => x.checked_sub(y),
        ArithOp::Multiply => x.checked_mul(y),
        ArithOp::Divide => {
            if y == 0 {
                return Err(errors::division_by_zero());
            }
            x.checked_div(y)
        }
        ArithOp::Modulo => {
            if y == 0 {
                return Err(errors::modulo_by_zero());
            }
            x.checked_rem(y)
        }
    };
    match result {
        Some(v) => ok(Value::Long(v)),
        None => Err(errors::arithmetic_overflow("intrinsic arithmetic")),
    }
}

fn double_arithmetic(op: ArithOp, x: f64, y: f64) -> DispatchResult {
    let result = match op {
        ArithOp::Add => x + y,
        ArithOp::Subtract => x - y,
        ArithOp::Multiply => x * y,
        ArithOp::Divide => {
            if y == 0.0 {
                return Err(errors::division_by_zero());
            }
            x / y
        }
        ArithOp::Modulo => {
            if y == 0.0 {
                return Err(errors::modulo_by_zero());
            }
            x % y
        }
    };
    ok(Value::Double(result))
}

// Bitwise and shifts — all on `Int`. Shift counts mask to the low 5 bits,
// the documented choice for the "negative/out-of-range shift count" open
// question.

fn bitwise(name: &str, args: &[Value]) -> Option<DispatchResult> {
    if name.eq_ignore_ascii_case("BitwiseNot") {
        return Some(if args.len() == 1 {
            match int_arg(args, 0) {
                Some(x) => ok(Value::Int(!x)),
                None => none(),
            }
        } else {
            none()
        });
    }
    let two_int = |f: fn(i32, i32) -> i32| -> DispatchResult {
        if args.len() != 2 {
            return none();
        }
        let (Some(x), Some(y)) = (int_arg(args, 0), int_arg(args, 1)) else {
            return none();
        };
        ok(Value::Int(f(x, y)))
    };
    if name.eq_ignore_ascii_case("BitwiseOr") {
        return Some(two_int(|a, b| a | b));
    }
    if name.eq_ignore_ascii_case("BitwiseAnd") {
        return Some(two_int(|a, b| a & b));
    }
    if name.eq_ignore_ascii_case("BitwiseXor") {
        return Some(two_int(|a, b| a ^ b));
    }
    if name.eq_ignore_ascii_case("LeftShift") {
        return Some(two_int(|a, b| a.wrapping_shl(b as u32 & 0x1F)));
    }
    if name.eq_ignore_ascii_case("RightShift") {
        return Some(two_int(|a, b| a.wrapping_shr(b as u32 & 0x1F)));
    }
    if name.eq_ignore_ascii_case("RightShiftUnsigned") {
        return Some(two_int(|a, b| ((a as u32).wrapping_shr(b as u32 & 0x1F)) as i32));
    }
    None
}

// Path helpers — each accepts either one string or a variable-length tail
// coerced as a string array, applying the same transform to every element.

fn path_helpers(name: &str, args: &[Value]) -> Option<DispatchResult> {
    let transform: fn(&str) -> String = if name.eq_ignore_ascii_case("EnsureTrailingSlash") {
        ensure_trailing_slash
    } else if name.eq_ignore_ascii_case("NormalizePath") || name.eq_ignore_ascii_case("NormalizeDirectory") {
        normalize_path
    } else {
        return None;
    };
    Some(map_path_args(args, transform))
}

fn map_path_args(args: &[Value], transform: fn(&str) -> String) -> DispatchResult {
    if args.len() == 1 {
        let Some(s) = str_arg(args, 0) else { return none() };
        return ok(Value::string(transform(&s)));
    }
    let Some(parts) = coerce::to_string_array_from_args(args) else { return none() };
    let joined = parts.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(std::path::MAIN_SEPARATOR_STR);
    ok(Value::string(transform(&joined)))
}

fn ensure_trailing_slash(s: &str) -> String {
    if s.is_empty() || s.ends_with('/') || s.ends_with('\\') {
        s.to_string()
    } else {
        format!("{s}{}", std::path::MAIN_SEPARATOR)
    }
}

fn normalize_path(s: &str) -> String {
    let mut normalized = std::path::PathBuf::new();
    for component in std::path::Path::new(s).components() {
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

// String helpers.

fn string_helpers(name: &str, args: &[Value]) -> Option<DispatchResult> {
    if name.eq_ignore_ascii_case("Escape") && args.len() == 1 {
        return Some(match str_arg(args, 0) {
            Some(s) => ok(Value::string(escape_special_chars(&s))),
            None => none(),
        });
    }
    if name.eq_ignore_ascii_case("Unescape") && args.len() == 1 {
        return Some(match str_arg(args, 0) {
            Some(s) => ok(Value::string(unescape_special_chars(&s))),
            None => none(),
        });
    }
    if name.eq_ignore_ascii_case("SubstringByAsciiChars") && args.len() == 3 {
        return Some(substring_by_ascii_chars(args));
    }
    if name.eq_ignore_ascii_case("ConvertToBase64") && args.len() == 1 {
        return Some(match str_arg(args, 0) {
            Some(s) => ok(Value::string(BASE64.encode(s.as_bytes()))),
            None => none(),
        });
    }
    if name.eq_ignore_ascii_case("ConvertFromBase64") && args.len() == 1 {
        return Some(convert_from_base64(args));
    }
    if name.eq_ignore_ascii_case("ValueOrDefault") && args.len() == 2 {
        return Some(value_or_default(args));
    }
    None
}

const ESCAPED_CHARS: &[char] = &['%', '$', '@', '(', ')', '\'', ';', '?', '*'];

fn escape_special_chars(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if ESCAPED_CHARS.contains(&c) {
            out.push_str(&format!("%{:02X}", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

fn unescape_special_chars(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Ok(code) = u8::from_str_radix(&s[i + 1..i + 3], 16) {
                out.push(code as char);
                i += 3;
                continue;
            }
        }
        out.push(s[i..].chars().next().unwrap_or('\0'));
        i += s[i..].chars().next().map_or(1, char::len_utf8);
    }
    out
}

fn substring_by_ascii_chars(args: &[Value]) -> DispatchResult {
    let Some(s) = str_arg(args, 0) else { return none() };
    let Some(start) = int_arg(args, 1) else { return none() };
    let Some(len) = int_arg(args, 2) else { return none() };
    let bytes = s.as_bytes();
    if start < 0 || len < 0 || (start as usize) + (len as usize) > bytes.len() {
        return Err(errors::index_out_of_range("SubstringByAsciiChars", i64::from(start), bytes.len()));
    }
    let slice = &bytes[start as usize..start as usize + len as usize];
    if !slice.is_ascii() {
        return Err(errors::operation_failed("SubstringByAsciiChars: range is not pure ASCII"));
    }
    ok(Value::string(String::from_utf8_lossy(slice).into_owned()))
}

fn convert_from_base64(args: &[Value]) -> DispatchResult {
    let Some(s) = str_arg(args, 0) else { return none() };
    match BASE64.decode(s.as_bytes()) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => ok(Value::string(text)),
            Err(_) => Err(errors::invalid_format("UTF-8 text", &s)),
        },
        Err(e) => Err(errors::invalid_format("base64 string", &e.to_string())),
    }
}

fn value_or_default(args: &[Value]) -> DispatchResult {
    let Some(value) = str_opt_arg(args, 0) else { return none() };
    let Some(default) = str_opt_arg(args, 1) else { return none() };
    match value {
        Some(v) if !v.is_empty() => ok(Value::Str(v)),
        _ => ok(default.map_or(Value::Null, Value::Str)),
    }
}

// Version predicates — both sides parsed fresh on every call, per §4.4.11.

fn version_predicates(name: &str, args: &[Value]) -> Option<DispatchResult> {
    type Pred = fn(std::cmp::Ordering) -> bool;
    let pred: Pred = if name.eq_ignore_ascii_case("VersionEquals") {
        |o| o.is_eq()
    } else if name.eq_ignore_ascii_case("VersionNotEquals") {
        |o| !o.is_eq()
    } else if name.eq_ignore_ascii_case("VersionGreaterThan") {
        |o| o.is_gt()
    } else if name.eq_ignore_ascii_case("VersionGreaterThanOrEquals") {
        |o| o.is_ge()
    } else if name.eq_ignore_ascii_case("VersionLessThan") {
        |o| o.is_lt()
    } else if name.eq_ignore_ascii_case("VersionLessThanOrEquals") {
        |o| o.is_le()
    } else {
        return None;
    };
    if args.len() != 2 {
        return Some(none());
    }
    Some(version_predicate(pred, args))
}

fn version_predicate(pred: fn(std::cmp::Ordering) -> bool, args: &[Value]) -> DispatchResult {
    let (Some(a), Some(b)) = (str_arg(args, 0), str_arg(args, 1)) else {
        return none();
    };
    let va = Version::parse(&a)?;
    let vb = Version::parse(&b)?;
    ok(Value::Bool(pred(va.cmp(&vb))))
}

// Target-framework helpers. TFM syntax is under-specified by the governing
// design (the historical source for this area exceeded the retrieval
// pack's size cap); this implements the common modern/legacy monikers
// (`net48`, `net6.0`, `netstandard2.0`, `netcoreapp3.1`,
// `net6.0-windows10.0.19041.0`) rather than the full historical grammar.

fn target_framework_helpers(name: &str, args: &[Value]) -> Option<DispatchResult> {
    if name.eq_ignore_ascii_case("GetTargetFrameworkIdentifier") && args.len() == 1 {
        return Some(match str_arg(args, 0) {
            Some(tfm) => ok(Value::string(tfm_identifier(&tfm))),
            None => none(),
        });
    }
    if name.eq_ignore_ascii_case("GetTargetFrameworkVersion") {
        return Some(match args.len() {
            1 => tfm_version(args, None),
            2 => tfm_version(args, Some(1)),
            _ => none(),
        });
    }
    if name.eq_ignore_ascii_case("IsTargetFrameworkCompatible") && args.len() == 2 {
        return Some(tfm_compatible(args));
    }
    if name.eq_ignore_ascii_case("GetTargetPlatformIdentifier") && args.len() == 1 {
        return Some(match str_arg(args, 0) {
            Some(tfm) => ok(Value::string(tpm_identifier(&tfm))),
            None => none(),
        });
    }
    if name.eq_ignore_ascii_case("GetTargetPlatformVersion") {
        return Some(match args.len() {
            1 => tpm_version(args, None),
            2 => tpm_version(args, Some(1)),
            _ => none(),
        });
    }
    None
}

fn tfm_identifier(tfm: &str) -> String {
    let lower = tfm.to_ascii_lowercase();
    let moniker = lower.split('-').next().unwrap_or(&lower);
    if let Some(rest) = moniker.strip_prefix("netstandard") {
        let _ = rest;
        ".NETStandard".to_string()
    } else if let Some(rest) = moniker.strip_prefix("netcoreapp") {
        let _ = rest;
        ".NETCoreApp".to_string()
    } else if let Some(rest) = moniker.strip_prefix("net") {
        if rest.contains('.') {
            ".NETCoreApp".to_string()
        } else {
            ".NETFramework".to_string()
        }
    } else {
        String::new()
    }
}

fn tfm_raw_version(tfm: &str) -> Option<Version> {
    let lower = tfm.to_ascii_lowercase();
    let moniker = lower.split('-').next().unwrap_or(&lower);
    let digits = moniker
        .strip_prefix("netstandard")
        .or_else(|| moniker.strip_prefix("netcoreapp"))
        .or_else(|| moniker.strip_prefix("net"))?;
    if digits.contains('.') {
        Version::parse(digits).ok()
    } else {
        // Legacy style, e.g. "48" -> 4.8, "472" -> 4.7.2.
        let chars: Vec<char> = digits.chars().collect();
        if chars.is_empty() {
            return None;
        }
        let major: i32 = chars[0].to_digit(10)? as i32;
        let rest: String = chars[1..].iter().collect();
        if rest.is_empty() {
            return Some(Version::new(major, 0, -1, -1));
        }
        let minor: i32 = rest[..1].parse().ok()?;
        if rest.len() > 1 {
            let build: i32 = rest[1..].parse().ok()?;
            Some(Version::new(major, minor, build, -1))
        } else {
            Some(Version::new(major, minor, -1, -1))
        }
    }
}

fn tfm_version(args: &[Value], field_count_index: Option<usize>) -> DispatchResult {
    let Some(tfm) = str_arg(args, 0) else { return none() };
    let Some(v) = tfm_raw_version(&tfm) else { return none() };
    let fields = match field_count_index {
        Some(i) => match int_arg(args, i) {
            Some(n) if n > 0 => n as usize,
            Some(_) => return none(),
            None => return none(),
        },
        None => v.field_count(),
    };
    let text = v.to_string_fields(fields).unwrap_or_else(|_| v.to_string());
    ok(Value::string(format!("v{text}")))
}

fn tfm_compatible(args: &[Value]) -> DispatchResult {
    let (Some(target), Some(candidate)) = (str_arg(args, 0), str_arg(args, 1)) else {
        return none();
    };
    let same_identifier = tfm_identifier(&target) == tfm_identifier(&candidate);
    let compatible = match (tfm_raw_version(&target), tfm_raw_version(&candidate)) {
        (Some(t), Some(c)) => same_identifier && c <= t,
        _ => false,
    };
    ok(Value::Bool(compatible))
}

fn tpm_identifier(tfm: &str) -> String {
    let Some((_, platform)) = tfm.split_once('-') else {
        return String::new();
    };
    let end = platform.find(|c: char| c.is_ascii_digit()).unwrap_or(platform.len());
    platform[..end].to_string()
}

fn tpm_raw_version(tfm: &str) -> Option<Version> {
    let (_, platform) = tfm.split_once('-')?;
    let start = platform.find(|c: char| c.is_ascii_digit())?;
    Version::parse(&platform[start..]).ok()
}

fn tpm_version(args: &[Value], field_count_index: Option<usize>) -> DispatchResult {
    let Some(tfm) = str_arg(args, 0) else { return none() };
    let Some(v) = tpm_raw_version(&tfm) else { return none() };
    let fields = match field_count_index {
        Some(i) => match int_arg(args, i) {
            Some(n) if n > 0 => n as usize,
            _ => return none(),
        },
        None => v.field_count(),
    };
    let text = v.to_string_fields(fields).unwrap_or_else(|_| v.to_string());
    ok(Value::string(text))
}

impl IntrinsicLibrary {
    // Hashing.

    fn hashing(&self, name: &str, args: &[Value]) -> Option<DispatchResult> {
        if !name.eq_ignore_ascii_case("StableStringHash") {
            return None;
        }
        Some(match args.len() {
            1 => {
                let Some(s) = str_arg(args, 0) else { return Some(none()) };
                let algo = if self.collaborators.feature_wave.are_features_enabled(&Version::new(17, 10, -1, -1)) {
                    HashAlgo::Fnv1a
                } else {
                    HashAlgo::Legacy
                };
                ok(Value::Long(stable_string_hash(&s, algo)))
            }
            2 => {
                let Some(s) = str_arg(args, 0) else { return Some(none()) };
                let Some(algo) = enum_arg::<HashAlgo>(args, 1) else { return Some(none()) };
                ok(Value::Long(stable_string_hash(&s, algo)))
            }
            _ => none(),
        })
    }

    // Feature gates.

    fn feature_gates(&self, name: &str, args: &[Value]) -> Option<DispatchResult> {
        if name.eq_ignore_ascii_case("AreFeaturesEnabled") && args.len() == 1 {
            return Some(match args.first() {
                Some(Value::Ver(v)) => ok(Value::Bool(self.collaborators.feature_wave.are_features_enabled(v))),
                _ => none(),
            });
        }
        if name.eq_ignore_ascii_case("CheckFeatureAvailability") && args.len() == 1 {
            return Some(match str_arg(args, 0) {
                Some(s) => {
                    let verdict = match self.collaborators.feature_wave.check_feature_availability(&s) {
                        FeatureAvailability::Available => "Available",
                        FeatureAvailability::NotYetAvailable => "NotYetAvailable",
                        FeatureAvailability::Unsupported => "Unsupported",
                    };
                    ok(Value::string(verdict))
                }
                None => none(),
            });
        }
        None
    }

    // OS and file-system.

    fn os_and_file_system(&self, name: &str, args: &[Value]) -> Option<DispatchResult> {
        if name.eq_ignore_ascii_case("IsOSPlatform") && args.len() == 1 {
            return Some(match str_arg(args, 0) {
                Some(id) => ok(Value::Bool(self.collaborators.os_platform.is_os_platform(&id))),
                None => none(),
            });
        }
        if name.eq_ignore_ascii_case("IsOsUnixLike") && args.is_empty() {
            return Some(ok(Value::Bool(self.collaborators.os_platform.is_unix_like())));
        }
        if name.eq_ignore_ascii_case("FileExists") && args.len() == 1 {
            return Some(match str_arg(args, 0) {
                Some(p) => ok(Value::Bool(self.collaborators.file_system.file_exists(&p))),
                None => none(),
            });
        }
        if name.eq_ignore_ascii_case("DirectoryExists") && args.len() == 1 {
            return Some(match str_arg(args, 0) {
                Some(p) => ok(Value::Bool(self.collaborators.file_system.directory_exists(&p))),
                None => none(),
            });
        }
        if name.eq_ignore_ascii_case("GetRegistryValueFromView") && args.len() >= 3 {
            return Some(self.registry_value_from_view(args));
        }
        if name.eq_ignore_ascii_case("GetDirectoryNameOfFileAbove") && args.len() == 2 {
            return Some(match (str_arg(args, 0), str_arg(args, 1)) {
                (Some(dir), Some(file)) => ok(self
                    .collaborators
                    .file_system
                    .directory_name_of_file_above(&dir, &file)
                    .map_or(Value::Null, Value::string)),
                _ => none(),
            });
        }
        if name.eq_ignore_ascii_case("GetPathOfFileAbove") && args.len() == 2 {
            return Some(match (str_arg(args, 0), str_arg(args, 1)) {
                (Some(dir), Some(file)) => ok(self
                    .collaborators
                    .file_system
                    .path_of_file_above(&dir, &file)
                    .map_or(Value::Null, Value::string)),
                _ => none(),
            });
        }
        None
    }

    fn registry_value_from_view(&self, args: &[Value]) -> DispatchResult {
        let Some(key) = str_arg(args, 0) else { return none() };
        let Some(value_name) = str_arg(args, 1) else { return none() };
        let default = args[2].clone();
        let views = &args[3..];
        ok(self.collaborators.registry.get_value(&key, &value_name, default, views))
    }

    // Environment.

    fn environment(&self, name: &str, args: &[Value]) -> Option<DispatchResult> {
        let nullary = |value: &str| -> DispatchResult {
            if args.is_empty() {
                ok(Value::string(value))
            } else {
                none()
            }
        };
        if name.eq_ignore_ascii_case("GetCurrentToolsDirectory") {
            return Some(nullary(&self.config.current_tools_directory));
        }
        if name.eq_ignore_ascii_case("GetToolsDirectory32") {
            return Some(nullary(&self.config.tools_directory32));
        }
        if name.eq_ignore_ascii_case("GetToolsDirectory64") {
            return Some(nullary(&self.config.tools_directory64));
        }
        if name.eq_ignore_ascii_case("GetMSBuildSDKsPath") {
            return Some(nullary(&self.config.msbuild_sdks_path));
        }
        if name.eq_ignore_ascii_case("GetVsInstallRoot") {
            return Some(nullary(&self.config.vs_install_root));
        }
        if name.eq_ignore_ascii_case("GetMSBuildExtensionsPath") {
            return Some(nullary(&self.config.msbuild_extensions_path));
        }
        if name.eq_ignore_ascii_case("GetProgramFiles32") {
            return Some(nullary(&self.config.program_files32));
        }
        if name.eq_ignore_ascii_case("IsRunningFromVisualStudio") && args.is_empty() {
            return Some(ok(Value::Bool(self.config.running_from_visual_studio)));
        }
        if name.eq_ignore_ascii_case("DoesTaskHostExist") && args.len() == 2 {
            return Some(match (str_arg(args, 0), str_arg(args, 1)) {
                (Some(runtime), Some(arch)) => {
                    let path = format!(
                        "{}/{runtime}-{arch}/MSBuildTaskHost.exe",
                        self.config.current_tools_directory
                    );
                    ok(Value::Bool(self.collaborators.file_system.file_exists(&path)))
                }
                _ => none(),
            });
        }
        if name.eq_ignore_ascii_case("RegisterBuildCheck") && args.len() == 3 {
            return Some(self.register_build_check(args));
        }
        None
    }

    fn register_build_check(&self, args: &[Value]) -> DispatchResult {
        let Some(project_path) = str_arg(args, 0) else { return none() };
        let Some(assembly_path) = str_arg(args, 1) else { return none() };
        self.collaborators
            .log_sink
            .log(&format!("RegisterBuildCheck: {project_path} <- {assembly_path}"));
        ok(Value::Bool(true))
    }
}

fn stable_string_hash(s: &str, algo: HashAlgo) -> i64 {
    match algo {
        HashAlgo::Legacy => legacy_hash(s),
        HashAlgo::Fnv1a => fnv1a_hash(s),
    }
}

/// A simple polynomial rolling hash, standing in for the pre-"17.10" hash
/// this method switches away from.
fn legacy_hash(s: &str) -> i64 {
    let mut hash: i64 = 5381;
    for b in s.bytes() {
        hash = hash.wrapping_mul(33).wrapping_add(i64::from(b));
    }
    hash
}

fn fnv1a_hash(s: &str) -> i64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;
    let mut hash = OFFSET_BASIS;
    for b in s.bytes() {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(PRIME);
    }
    hash as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::stub::{NullLogSink, StubFeatureWave, StubFileSystem, StubOsPlatform, StubRegistry};
    use pretty_assertions::assert_eq;

    fn lib() -> IntrinsicLibrary {
        IntrinsicLibrary {
            collaborators: Collaborators {
                file_system: Box::new(StubFileSystem::default()),
                registry: Box::new(StubRegistry),
                os_platform: Box::new(StubOsPlatform { unix_like: true }),
                feature_wave: Box::new(StubFeatureWave::default()),
                log_sink: Box::new(NullLogSink),
            },
            config: DispatcherConfig::default(),
        }
    }

    #[test]
    fn add_of_two_integral_strings_prefers_long() {
        let r = lib().exec_static("Add", &[Value::string("1"), Value::string("2")]);
        assert_eq!(r.unwrap(), Some(Value::Long(3)));
    }

    #[test]
    fn add_falls_back_to_double_when_not_both_integral() {
        let r = lib().exec_static("Add", &[Value::string("1.5"), Value::string("2")]);
        assert_eq!(r.unwrap(), Some(Value::Double(3.5)));
    }

    #[test]
    fn right_shift_unsigned_matches_spec_scenario() {
        let r = lib().exec_static("RightShiftUnsigned", &[Value::Int(16), Value::Int(2)]);
        assert_eq!(r.unwrap(), Some(Value::Int(4)));
    }

    #[test]
    fn right_shift_masks_out_of_range_count_to_low_five_bits() {
        let r = lib().exec_static("RightShift", &[Value::Int(-8), Value::Int(33)]);
        assert_eq!(r.unwrap(), Some(Value::Int(-4)));
    }

    #[test]
    fn divide_by_zero_propagates_as_an_error() {
        let r = lib().exec_static("Divide", &[Value::Int(1), Value::Int(0)]);
        assert!(r.is_err());
    }

    #[test]
    fn bitwise_not_arity_mismatch_is_none() {
        let r = lib().exec_static("BitwiseNot", &[Value::Int(1), Value::Int(2)]);
        assert_eq!(r.unwrap(), None);
    }

    #[test]
    fn version_greater_than() {
        let r = lib().exec_static("VersionGreaterThan", &[Value::string("2.0"), Value::string("1.9")]);
        assert_eq!(r.unwrap(), Some(Value::Bool(true)));
    }

    #[test]
    fn escape_and_unescape_round_trip_special_chars() {
        let escaped = escape_special_chars("50%($x)");
        assert_eq!(unescape_special_chars(&escaped), "50%($x)");
    }

    #[test]
    fn base64_round_trips() {
        let encoded = lib().exec_static("ConvertToBase64", &[Value::string("hello")]).unwrap();
        let Some(Value::Str(s)) = encoded else { panic!("expected a string") };
        let decoded = lib().exec_static("ConvertFromBase64", &[Value::Str(s)]);
        assert_eq!(decoded.unwrap(), Some(Value::string("hello")));
    }

    #[test]
    fn target_framework_identifier_modern_moniker() {
        let r = lib().exec_static("GetTargetFrameworkIdentifier", &[Value::string("net6.0")]);
        assert_eq!(r.unwrap(), Some(Value::string(".NETCoreApp")));
    }

    #[test]
    fn target_framework_identifier_legacy_moniker() {
        let r = lib().exec_static("GetTargetFrameworkIdentifier", &[Value::string("net48")]);
        assert_eq!(r.unwrap(), Some(Value::string(".NETFramework")));
    }

    #[test]
    fn target_platform_identifier_from_composite_moniker() {
        let r = lib().exec_static(
            "GetTargetPlatformIdentifier",
            &[Value::string("net6.0-windows10.0.19041.0")],
        );
        assert_eq!(r.unwrap(), Some(Value::string("windows")));
    }

    #[test]
    fn stable_string_hash_is_deterministic() {
        let a = lib().exec_static("StableStringHash", &[Value::string("abc")]);
        let b = lib().exec_static("StableStringHash", &[Value::string("abc")]);
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn value_or_default_prefers_non_empty_value() {
        let r = lib().exec_static("ValueOrDefault", &[Value::string("x"), Value::string("fallback")]);
        assert_eq!(r.unwrap(), Some(Value::string("x")));
        let r = lib().exec_static("ValueOrDefault", &[Value::Null, Value::string("fallback")]);
        assert_eq!(r.unwrap(), Some(Value::string("fallback")));
    }
}
