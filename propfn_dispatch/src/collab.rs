//! Collaborator interfaces injected into the dispatcher at construction
//! time: file system, registry, OS platform, feature wave, and logging.
//!
//! Each is a narrow trait so the dispatcher's own tests can supply a
//! deterministic stand-in instead of touching the real file system,
//! registry, or OS, the same way the evaluator this crate descends from
//! takes its runtime collaborators as constructor parameters rather than
//! reaching for process-global state.

use propfn_value::Value;

/// Feature-availability verdicts `FeatureWave::check_feature_availability`
/// can return.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeatureAvailability {
    Available,
    NotYetAvailable,
    Unsupported,
}

/// Read-only file-system queries. Must be idempotent and free of side
/// effects beyond reading the real file system.
pub trait FileSystem: Send + Sync {
    fn file_exists(&self, path: &str) -> bool;
    fn directory_exists(&self, path: &str) -> bool;

    /// Walk upward from `start_dir` looking for a file named `file_name`;
    /// returns the directory that contains it, if any.
    fn directory_name_of_file_above(&self, start_dir: &str, file_name: &str) -> Option<String>;

    /// As `directory_name_of_file_above`, but returns the full file path.
    fn path_of_file_above(&self, start_dir: &str, file_name: &str) -> Option<String> {
        self.directory_name_of_file_above(start_dir, file_name)
            .map(|dir| format!("{dir}/{file_name}"))
    }
}

/// Platform-agnostic registry reads. No writes are ever exposed.
pub trait Registry: Send + Sync {
    /// Read a value, falling back to `default` if the key, value, or any
    /// of `views` is not found. `views` names the registry views to try in
    /// order (e.g. `"Registry32"`, `"Registry64"`).
    fn get_value(&self, key: &str, value_name: &str, default: Value, views: &[Value]) -> Value;
}

/// OS identification.
pub trait OsPlatform: Send + Sync {
    fn is_os_platform(&self, id: &str) -> bool;
    fn is_unix_like(&self) -> bool;
}

/// Version-gated behavior switch, keyed by feature-wave version strings
/// like `"17.10"`.
pub trait FeatureWave: Send + Sync {
    fn are_features_enabled(&self, wave: &propfn_value::Version) -> bool;
    fn check_feature_availability(&self, feature: &str) -> FeatureAvailability;
}

/// Sink for the dispatcher's own diagnostic messages (used by
/// `RegisterBuildCheck` and available for collaborators to log through
/// uniformly).
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str);
}

/// The full set of collaborators a `Dispatcher` is constructed with.
pub struct Collaborators {
    pub file_system: Box<dyn FileSystem>,
    pub registry: Box<dyn Registry>,
    pub os_platform: Box<dyn OsPlatform>,
    pub feature_wave: Box<dyn FeatureWave>,
    pub log_sink: Box<dyn LogSink>,
}

/// Stub collaborators for tests and for callers that don't need the real
/// file system, registry, or OS behind these traits.
pub mod stub {
    use super::{FeatureAvailability, FeatureWave, FileSystem, LogSink, OsPlatform, Registry};
    use propfn_value::Value;

    #[derive(Default)]
    pub struct StubFileSystem {
        pub existing_files: Vec<String>,
        pub existing_directories: Vec<String>,
    }

    impl FileSystem for StubFileSystem {
        fn file_exists(&self, path: &str) -> bool {
            self.existing_files.iter().any(|p| p == path)
        }

        fn directory_exists(&self, path: &str) -> bool {
            self.existing_directories.iter().any(|p| p == path)
        }

        fn directory_name_of_file_above(&self, start_dir: &str, file_name: &str) -> Option<String> {
            let mut dir = start_dir.to_string();
            loop {
                if self.file_exists(&format!("{dir}/{file_name}")) {
                    return Some(dir);
                }
                let Some(parent) = dir.rsplit_once('/').map(|(p, _)| p.to_string()) else {
                    return None;
                };
                if parent.is_empty() {
                    return None;
                }
                dir = parent;
            }
        }
    }

    pub struct StubRegistry;

    impl Registry for StubRegistry {
        fn get_value(&self, _key: &str, _value_name: &str, default: Value, _views: &[Value]) -> Value {
            default
        }
    }

    pub struct StubOsPlatform {
        pub unix_like: bool,
    }

    impl OsPlatform for StubOsPlatform {
        fn is_os_platform(&self, id: &str) -> bool {
            if self.unix_like {
                id.eq_ignore_ascii_case("linux") || id.eq_ignore_ascii_case("osx")
            } else {
                id.eq_ignore_ascii_case("windows")
            }
        }

        fn is_unix_like(&self) -> bool {
            self.unix_like
        }
    }

    #[derive(Default)]
    pub struct StubFeatureWave {
        pub enabled_waves: Vec<propfn_value::Version>,
    }

    impl FeatureWave for StubFeatureWave {
        fn are_features_enabled(&self, wave: &propfn_value::Version) -> bool {
            self.enabled_waves.iter().any(|v| v >= wave)
        }

        fn check_feature_availability(&self, _feature: &str) -> FeatureAvailability {
            FeatureAvailability::Available
        }
    }

    pub struct NullLogSink;

    impl LogSink for NullLogSink {
        fn log(&self, _message: &str) {}
    }
}

#[cfg(test)]
mod tests {
    use super::stub::StubFileSystem;
    use super::*;

    #[test]
    fn stub_file_system_walks_upward() {
        let fs = StubFileSystem {
            existing_files: vec!["/repo/Directory.Build.props".to_string()],
            existing_directories: vec![],
        };
        assert_eq!(
            fs.directory_name_of_file_above("/repo/src/proj", "Directory.Build.props"),
            Some("/repo".to_string())
        );
        assert_eq!(
            fs.directory_name_of_file_above("/other/src", "Directory.Build.props"),
            None
        );
    }
}
