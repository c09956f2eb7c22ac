//! Top-level router (C5): picks a library by receiver type or by the
//! runtime variant of an instance, handles `ToString` uniformly, and
//! optionally records declined calls to the reflection-fallback log.

use propfn_value::Value;

use crate::collab::Collaborators;
use crate::config::DispatcherConfig;
use crate::fallback_log::FallbackLog;
use crate::libraries::{
    char::CharLibrary, directory::DirectoryLibrary, guid::GuidLibrary, int::IntLibrary,
    intrinsic::IntrinsicLibrary, math::MathLibrary, path::PathLibrary, regex::RegexLibrary,
    string::StringLibrary, string_array::StringArrayLibrary, version::VersionLibrary,
};
use crate::outcome::{none, DispatchResult};
use crate::traits::{InstanceLibrary, StaticLibrary};

/// The fixed set of receivers the dispatcher knows about. A small series of
/// identity comparisons — the set is fixed at ~10 entries, where benchmarks
/// favor that over a generic map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReceiverType {
    String,
    Path,
    Intrinsic,
    Math,
    Directory,
    Char,
    Guid,
    Version,
    Regex,
}

pub struct Dispatcher {
    string: StringLibrary,
    string_array: StringArrayLibrary,
    int: IntLibrary,
    version: VersionLibrary,
    guid: GuidLibrary,
    path: PathLibrary,
    math: MathLibrary,
    directory: DirectoryLibrary,
    char: CharLibrary,
    regex: RegexLibrary,
    intrinsic: IntrinsicLibrary,
    fallback_log: FallbackLog,
}

impl Dispatcher {
    pub fn new(collaborators: Collaborators, config: DispatcherConfig, fallback_log_enabled: bool) -> Self {
        Self {
            string: StringLibrary,
            string_array: StringArrayLibrary,
            int: IntLibrary,
            version: VersionLibrary,
            guid: GuidLibrary,
            path: PathLibrary,
            math: MathLibrary,
            directory: DirectoryLibrary,
            char: CharLibrary,
            regex: RegexLibrary,
            intrinsic: IntrinsicLibrary { collaborators, config },
            fallback_log: FallbackLog::new(fallback_log_enabled),
        }
    }

    /// The dispatcher's single public entry point.
    pub fn dispatch(
        &self,
        receiver_type: ReceiverType,
        method_name: &str,
        instance: Option<&Value>,
        args: &[Value],
    ) -> DispatchResult {
        let result = if let Some(instance) = instance {
            self.dispatch_instance(instance, method_name, args)
        } else {
            self.dispatch_static(receiver_type, method_name, args)
        };
        if let Ok(None) = result {
            let receiver_name = receiver_type_name(receiver_type);
            tracing::debug!(receiver = receiver_name, method = method_name, "dispatch declined, falling back");
            self.fallback_log.record(receiver_name, instance, method_name, args);
        }
        result
    }

    fn dispatch_instance(&self, instance: &Value, method_name: &str, args: &[Value]) -> DispatchResult {
        if method_name.eq_ignore_ascii_case("ToString") {
            if args.is_empty() {
                return Ok(Some(Value::string(instance.default_to_string())));
            }
            return self.to_string_library(instance).map_or(none(), |lib| lib.exec_to_string(instance, args));
        }
        match instance {
            Value::Str(_) => self.string.exec_instance(instance, method_name, args),
            Value::StrArr(_) => self.string_array.exec_instance(instance, method_name, args),
            Value::Int(_) => self.int.exec_instance(instance, method_name, args),
            Value::Ver(_) => self.version.exec_instance(instance, method_name, args),
            _ => none(),
        }
    }

    fn to_string_library(&self, instance: &Value) -> Option<&dyn InstanceLibrary> {
        match instance {
            Value::Int(_) => Some(&self.int),
            Value::Ver(_) => Some(&self.version),
            Value::Guid(_) => Some(&self.guid),
            _ => None,
        }
    }

    fn dispatch_static(&self, receiver_type: ReceiverType, method_name: &str, args: &[Value]) -> DispatchResult {
        let lib: &dyn StaticLibrary = match receiver_type {
            ReceiverType::String => &self.string,
            ReceiverType::Path => &self.path,
            ReceiverType::Intrinsic => &self.intrinsic,
            ReceiverType::Math => &self.math,
            ReceiverType::Directory => &self.directory,
            ReceiverType::Char => &self.char,
            ReceiverType::Guid => &self.guid,
            ReceiverType::Version => &self.version,
            ReceiverType::Regex => &self.regex,
        };
        lib.exec_static(method_name, args)
    }
}

fn receiver_type_name(receiver_type: ReceiverType) -> &'static str {
    match receiver_type {
        ReceiverType::String => "String",
        ReceiverType::Path => "Path",
        ReceiverType::Intrinsic => "Intrinsic",
        ReceiverType::Math => "Math",
        ReceiverType::Directory => "Directory",
        ReceiverType::Char => "Char",
        ReceiverType::Guid => "Guid",
        ReceiverType::Version => "Version",
        ReceiverType::Regex => "Regex",
    }
}
