//! The reflection-fallback log: an opt-in, append-only record of calls the
//! dispatcher declined, so they can be found and either implemented or
//! understood to be genuinely rare.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use propfn_value::Value;

/// Default log file name, relative to the current working directory, per
/// the documented external artifact.
pub const DEFAULT_LOG_FILE_NAME: &str = "PropertyFunctionsRequiringReflection";

pub struct FallbackLog {
    enabled: bool,
    path: PathBuf,
}

impl FallbackLog {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            path: PathBuf::from(DEFAULT_LOG_FILE_NAME),
        }
    }

    /// Override the log path (tests only need this to avoid writing into
    /// the repository's working directory).
    pub fn with_path(enabled: bool, path: impl AsRef<Path>) -> Self {
        Self {
            enabled,
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record an unresolved call. A no-op when the flag is off. Errors
    /// opening or writing the file are silently swallowed — a failure to
    /// log a fallback must never surface as a failure of the call itself.
    pub fn record(&self, receiver_type: &str, instance: Option<&Value>, method_name: &str, args: &[Value]) {
        if !self.enabled {
            return;
        }
        let object_instance_type = instance.map_or("<none>", Value::type_name);
        let arg_types = args
            .iter()
            .map(Value::type_name)
            .collect::<Vec<_>>()
            .join(", ");
        let line = format!(
            "ReceiverType={receiver_type}; ObjectInstanceType={object_instance_type}; MethodName={method_name}({arg_types})\n"
        );
        if let Err(e) = self.write_line(&line) {
            tracing::warn!(error = %e, path = %self.path.display(), "failed to append to reflection-fallback log");
        }
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn disabled_log_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("propfn_log_test_disabled_{:?}", std::thread::current().id()));
        let log = FallbackLog::with_path(false, &dir);
        log.record("String", None, "Frobnicate", &[]);
        assert!(!dir.exists());
    }

    #[test]
    fn enabled_log_appends_formatted_line() {
        let dir = std::env::temp_dir().join(format!("propfn_log_test_enabled_{:?}", std::thread::current().id()));
        let _ = std::fs::remove_file(&dir);
        let log = FallbackLog::with_path(true, &dir);
        log.record("String", Some(&Value::string("x")), "Frobnicate", &[Value::Int(1)]);
        let contents = std::fs::read_to_string(&dir).unwrap();
        assert_eq!(
            contents,
            "ReceiverType=String; ObjectInstanceType=System.String; MethodName=Frobnicate(System.Int32)\n"
        );
        let _ = std::fs::remove_file(&dir);
    }
}
