//! Process-wide configuration the `Intrinsic` library's environment
//! queries read from. Populated once at `Dispatcher` construction, never
//! mutated afterward — the same "frozen at startup" discipline as the
//! function-id tables.

#[derive(Clone, Debug)]
pub struct DispatcherConfig {
    pub current_tools_directory: String,
    pub tools_directory32: String,
    pub tools_directory64: String,
    pub msbuild_sdks_path: String,
    pub vs_install_root: String,
    pub msbuild_extensions_path: String,
    pub program_files32: String,
    pub running_from_visual_studio: bool,
}

impl DispatcherConfig {
    /// Build from the environment, falling back to empty strings for
    /// anything unset — callers on platforms without these variables get a
    /// `Str("")` back from the corresponding `Intrinsic` method rather than
    /// a spurious `None`.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            current_tools_directory: var("MSBUILD_EXE_PATH"),
            tools_directory32: var("ProgramFiles(x86)"),
            tools_directory64: var("ProgramW6432"),
            msbuild_sdks_path: var("MSBuildSDKsPath"),
            vs_install_root: var("VSINSTALLDIR"),
            msbuild_extensions_path: var("MSBuildExtensionsPath"),
            program_files32: var("ProgramFiles(x86)"),
            running_from_visual_studio: std::env::var("VisualStudioVersion").is_ok(),
        }
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            current_tools_directory: String::new(),
            tools_directory32: String::new(),
            tools_directory64: String::new(),
            msbuild_sdks_path: String::new(),
            vs_install_root: String::new(),
            msbuild_extensions_path: String::new(),
            program_files32: String::new(),
            running_from_visual_studio: false,
        }
    }
}
