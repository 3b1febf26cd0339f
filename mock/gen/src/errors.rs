//! Error types for the mock generator.

use thiserror::Error;

/// Errors that can occur while generating mock files.
///
/// Every variant is terminal for a run: the pipeline stops at the first
/// error and files written before it are left in place.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The input directory could not be listed
    #[error("Failed to list input directory '{path}': {source}")]
    ListInputs {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A definition file could not be read
    #[error("Failed to read definition file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A definition file is not valid Rust source
    #[error("Failed to parse definition file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// The file stem cannot be used as a module name.
    ///
    /// Generated files import the originating module by its file stem, so
    /// the stem has to be a plain Rust identifier (e.g. `my-types.rs` is
    /// rejected, `my_types.rs` is accepted).
    #[error("Definition file '{path}' has a stem '{stem}' that is not a valid module name")]
    InvalidModuleName { path: String, stem: String },

    /// Two structs of one definition file map to the same output path.
    ///
    /// Only possible in per-type mode, where the file name is derived from
    /// the snake_case type name (e.g. `Foo` and `FOO` both become `foo`).
    #[error(
        "Structs '{first}' and '{second}' in '{definition}' would both be written to '{path}'"
    )]
    OutputCollision {
        definition: String,
        path: String,
        first: String,
        second: String,
    },

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// The output directory could not be created
    #[error("Failed to create output directory '{path}': {source}")]
    CreateDirError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
