//! Generator configuration.
//!
//! The command-line tool always runs with [`GeneratorConfig::default()`]:
//! definition files are read from `generators/` and mocks are written to
//! `generators/mocks/`. The fields exist so the library (and its tests) can
//! point the pipeline somewhere else.

use std::path::{Path, PathBuf};

/// Directory scanned for definition files, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "generators";

/// Subdirectory of the input directory that receives generated files.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "mocks";

/// Extension that marks a definition file.
pub const DEFAULT_SOURCE_EXTENSION: &str = "rs";

/// Suffix appended to the input file stem to name its generated file.
pub const DEFAULT_MOCK_SUFFIX: &str = "_mock";

/// File stems that name a module root rather than a module of their own.
///
/// `generators/mod.rs` declares the `generators` module (and usually
/// `pub mod mocks;`), so it is never treated as a definition file.
const MODULE_ROOT_STEMS: &[&str] = &["mod", "lib", "main"];

/// How generated units are mapped onto output files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One output file per definition file.
    ///
    /// When a definition file declares several structs, each one is
    /// synthesized in declaration order and the last one owns the file.
    #[default]
    PerFile,

    /// One output file per struct, named `<stem>_<type>_mock.rs`.
    PerType,
}

/// Locations and naming used by a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory containing the definition files (not searched recursively).
    pub input_dir: PathBuf,
    /// Name of the output directory, created beneath `input_dir`.
    pub output_subdir: String,
    /// File extension (without the dot) of definition files.
    pub source_extension: String,
    /// Suffix appended to a file stem when naming its output.
    pub mock_suffix: String,
    /// Mapping of generated units onto files.
    pub output_mode: OutputMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_subdir: DEFAULT_OUTPUT_SUBDIR.to_string(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            mock_suffix: DEFAULT_MOCK_SUFFIX.to_string(),
            output_mode: OutputMode::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration rooted at another input directory.
    pub fn with_input_dir(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }

    /// Returns a copy of this configuration using the given output mode.
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    /// Directory that receives generated files.
    pub fn output_dir(&self) -> PathBuf {
        self.input_dir.join(&self.output_subdir)
    }

    /// Returns `true` if `path` names a module root (`mod.rs`, `lib.rs`,
    /// `main.rs`) with the configured extension.
    pub fn is_module_root(&self, path: &Path) -> bool {
        self.has_source_extension(path)
            && path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| MODULE_ROOT_STEMS.contains(&stem))
    }

    /// Returns `true` if `path` has the configured definition-file extension
    /// and is not a module root.
    pub fn is_definition_file(&self, path: &Path) -> bool {
        self.has_source_extension(path) && !self.is_module_root(path)
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == self.source_extension.as_str())
    }
}
