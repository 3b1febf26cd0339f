//! Mock companion generator for Rust struct definitions.
//!
//! This crate scans a directory of definition files, finds the structs each
//! file declares, and writes a companion file per definition file holding:
//!
//! - An import of the originating module
//! - A `set_<field>` / `get_<field>` pair for every field, in declaration order
//! - `query()` and `execute()` stubs to be filled in by hand
//!
//! ## Modules
//!
//! - [`config`] - Fixed input/output locations and the output mode
//! - [`extractor`] - Parsing definition files and collecting structs
//! - [`codegen`] - Token generation for accessors, stubs and whole files
//! - [`output`] - Validation, formatting, output naming and atomic writes
//! - [`pipeline`] - The fail-fast generation run
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use mock_gen::config::GeneratorConfig;
//! use mock_gen::pipeline::run;
//!
//! // Reads generators/*.rs and writes generators/mocks/*_mock.rs
//! let summary = run(&GeneratorConfig::default()).unwrap();
//! println!("wrote {} files", summary.outputs.len());
//! ```
//!
//! ## Generated Code Structure
//!
//! For `generators/item.rs` containing `pub struct Item { pub name: String }`,
//! `generators/mocks/item_mock.rs` contains:
//!
//! ```text
//! // This code was automatically generated by mock-gen. Do not edit manually.
//!
//! //! Accessors and stubs for [`item::Item`].
//! use crate::item;
//! impl item::Item {
//!     /// Sets the `name` field.
//!     pub fn set_name(&mut self, value: String) {
//!         self.name = value;
//!     }
//!     /// Returns the `name` field.
//!     pub fn get_name(&self) -> String {
//!         self.name.clone()
//!     }
//!     /// Implement your query generation logic here.
//!     pub fn query(&self) -> String {
//!         String::new()
//!     }
//!     /// Implement your query execution logic here.
//!     pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
//!         Ok(())
//!     }
//! }
//! ```

pub mod codegen;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod output;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{GeneratorConfig, OutputMode};
pub use errors::GeneratorError;
pub use pipeline::{RunSummary, run, run_with};
