//! Validation, formatting, naming and writing of generated files.
//!
//! ## Output Layout
//!
//! ```text
//! generators/
//! ├── item.rs            # definition file
//! ├── notes.txt          # ignored
//! └── mocks/
//!     └── item_mock.rs   # generated from item.rs
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: generated tokens are parsed with `syn` before writing
//! - **Formatting**: output is formatted with `prettyplease`
//! - **Atomic writes**: temp file + rename, so a file is never half-written

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use tracing::debug;

use crate::codegen::synthesize;
use crate::config::{GeneratorConfig, OutputMode};
use crate::errors::GeneratorError;
use crate::extractor::{DefinitionFile, RecordType};

/// Notice placed at the top of every generated file.
pub const GENERATED_NOTICE: &str =
    "// This code was automatically generated by mock-gen. Do not edit manually.";

/// Formatted output for one struct, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Destination of the unit.
    pub path: PathBuf,
    /// Name of the struct the unit was generated from.
    pub type_name: String,
    /// Formatted source text.
    pub code: String,
}

/// Validates generated code using syn.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the tokens do not form a valid
/// Rust file.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats a validated file with prettyplease, prefixed by [`GENERATED_NOTICE`].
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{}\n\n{}", GENERATED_NOTICE, formatted)
}

/// Computes where the output for a struct named `type_name`, declared in the
/// definition file `definition`, is written.
///
/// - `OutputMode::PerFile`: `<output_dir>/<stem><suffix>.<ext>`
/// - `OutputMode::PerType`: `<output_dir>/<stem>_<type_snake><suffix>.<ext>`
///
/// The result depends only on the file name, the type name and the
/// configuration.
pub fn output_path(config: &GeneratorConfig, definition: &Path, type_name: &str) -> PathBuf {
    let stem = definition
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match config.output_mode {
        OutputMode::PerFile => format!(
            "{}{}.{}",
            stem, config.mock_suffix, config.source_extension
        ),
        OutputMode::PerType => format!(
            "{}_{}{}.{}",
            stem,
            to_snake_case(type_name),
            config.mock_suffix,
            config.source_extension
        ),
    };

    config.output_dir().join(file_name)
}

/// Synthesizes, validates and formats the unit for one struct.
///
/// ## Arguments
///
/// * `config` - Output locations and mode, used to name the unit
/// * `definition` - The file `record` was declared in
/// * `record` - The struct to generate accessors for
///
/// ## Returns
///
/// A [`GeneratedUnit`] holding the formatted code and its destination.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the synthesized code does not
/// parse; the error names the definition file and the struct.
pub fn render_unit(
    config: &GeneratorConfig,
    definition: &DefinitionFile,
    record: &RecordType,
) -> Result<GeneratedUnit, GeneratorError> {
    let type_name = record.name.to_string();
    let tokens = synthesize(&definition.package, record);

    // Reject before formatting; prettyplease expects a well-formed file
    let file = validate_code(&tokens).map_err(|e| match e {
        GeneratorError::CodeGenError(message) => GeneratorError::CodeGenError(format!(
            "{} (struct `{}` in '{}')",
            message,
            type_name,
            definition.path.display()
        )),
        other => other,
    })?;

    debug!(
        file = %definition.path.display(),
        type_name = %type_name,
        fields = record.fields.len(),
        "synthesized unit"
    );

    Ok(GeneratedUnit {
        path: output_path(config, &definition.path, &type_name),
        type_name,
        code: format_code(&file),
    })
}

/// Creates the output directory if it does not already exist.
///
/// ## Errors
///
/// Returns `GeneratorError::CreateDirError` if the directory cannot be created.
pub fn ensure_output_dir(config: &GeneratorConfig) -> Result<PathBuf, GeneratorError> {
    let dir = config.output_dir();
    fs::create_dir_all(&dir).map_err(|e| GeneratorError::CreateDirError {
        path: dir.display().to_string(),
        source: e,
    })?;
    Ok(dir)
}

/// Writes content to a file atomically using temp file + rename.
///
/// An existing file at `path` is replaced. The parent directory must exist.
///
/// ## Arguments
///
/// * `path` - The target file path
/// * `content` - The content to write
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if the temp file cannot be written
/// or the rename fails. A failed rename removes the temp file.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    // Write to temp file first
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    // Atomically rename to final path
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(GeneratorError::WriteError {
            path: path.display().to_string(),
            source: e,
        });
    }

    Ok(())
}

/// Converts a CamelCase type name to snake_case.
///
/// - "Item" -> "item"
/// - "OrderLine" -> "order_line"
/// - "HTTPRequest" -> "http_request"
fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}
