//! The generation run: list, parse, extract, synthesize, write.
//!
//! Definition files are processed one at a time in file-name order. The
//! first error of any stage stops the run; outputs already written for
//! earlier files stay on disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{GeneratorConfig, OutputMode};
use crate::errors::GeneratorError;
use crate::extractor::read_definition;
use crate::output::{GeneratedUnit, ensure_output_dir, render_unit, write_atomic};

/// Counts gathered over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Definition files that were parsed.
    pub files_processed: usize,
    /// Paths of the units handed to the sink, in order.
    pub outputs: Vec<PathBuf>,
}

/// Lists the definition files of the input directory, sorted by name.
///
/// Only regular files carrying the configured extension are returned;
/// subdirectories (including the output directory), module roots and other
/// files are skipped without error.
///
/// ## Returns
///
/// Paths of the definition files, sorted so runs are reproducible.
///
/// ## Errors
///
/// Returns `GeneratorError::ListInputs` if the directory cannot be read.
pub fn list_inputs(config: &GeneratorConfig) -> Result<Vec<PathBuf>, GeneratorError> {
    let list_error = |e: std::io::Error| GeneratorError::ListInputs {
        path: config.input_dir.display().to_string(),
        source: e,
    };

    let mut inputs = Vec::new();
    for entry in fs::read_dir(&config.input_dir).map_err(list_error)? {
        let path = entry.map_err(list_error)?.path();
        if path.is_file() && config.is_definition_file(&path) {
            inputs.push(path);
        } else if config.is_module_root(&path) {
            debug!(path = %path.display(), "skipping module root");
        } else {
            debug!(path = %path.display(), "skipping non-definition entry");
        }
    }

    inputs.sort();
    Ok(inputs)
}

/// Generates the units for one definition file.
///
/// Every struct in the file is synthesized and validated. In
/// `OutputMode::PerFile` all of them target the same path, so only the last
/// one is returned; in `OutputMode::PerType` every unit is returned.
///
/// ## Arguments
///
/// * `config` - Output locations and mode
/// * `path` - The definition file to process
///
/// ## Returns
///
/// The units to hand to the sink, in declaration order. A file without
/// structs yields an empty vector.
///
/// ## Errors
///
/// Propagates read, parse and code generation errors, and returns
/// `GeneratorError::OutputCollision` if two per-type units share a path.
pub fn generate_file(
    config: &GeneratorConfig,
    path: &Path,
) -> Result<Vec<GeneratedUnit>, GeneratorError> {
    let definition = read_definition(path)?;
    let records = definition.record_types();

    if records.is_empty() {
        debug!(file = %path.display(), "no structs found");
        return Ok(Vec::new());
    }

    let mut units = records
        .iter()
        .map(|record| render_unit(config, &definition, record))
        .collect::<Result<Vec<_>, _>>()?;

    match config.output_mode {
        OutputMode::PerFile if units.len() > 1 => {
            // Last struct owns the file; earlier ones were still validated.
            let discarded: Vec<&str> = units[..units.len() - 1]
                .iter()
                .map(|u| u.type_name.as_str())
                .collect();
            debug!(
                file = %path.display(),
                kept = %units[units.len() - 1].type_name,
                discarded = ?discarded,
                "multiple structs share one output file; only the last is kept"
            );
            units.drain(..units.len() - 1);
        }
        OutputMode::PerType => check_distinct_paths(path, &units)?,
        OutputMode::PerFile => {}
    }

    Ok(units)
}

fn check_distinct_paths(definition: &Path, units: &[GeneratedUnit]) -> Result<(), GeneratorError> {
    let mut seen: HashMap<&Path, &str> = HashMap::new();
    for unit in units {
        if let Some(first) = seen.insert(unit.path.as_path(), unit.type_name.as_str()) {
            return Err(GeneratorError::OutputCollision {
                definition: definition.display().to_string(),
                path: unit.path.display().to_string(),
                first: first.to_string(),
                second: unit.type_name.clone(),
            });
        }
    }
    Ok(())
}

/// Runs the generator, handing every unit to `sink` as soon as its file has
/// been processed. Nothing is written to disk unless the sink does it.
///
/// ## Errors
///
/// Stops at the first error from listing, parsing, code generation or the
/// sink.
pub fn run_with<F>(config: &GeneratorConfig, sink: F) -> Result<RunSummary, GeneratorError>
where
    F: FnMut(&GeneratedUnit) -> Result<(), GeneratorError>,
{
    let inputs = list_inputs(config)?;
    process_inputs(config, &inputs, sink)
}

/// Runs the generator and writes every unit to disk.
///
/// The input directory is listed first; the output directory is then
/// created once, before any definition file is processed.
///
/// ## Errors
///
/// Stops at the first error; see [`run_with`].
pub fn run(config: &GeneratorConfig) -> Result<RunSummary, GeneratorError> {
    // List before creating anything, so a missing input dir is left alone
    let inputs = list_inputs(config)?;
    let output_dir = ensure_output_dir(config)?;
    debug!(output_dir = %output_dir.display(), "output directory ready");

    process_inputs(config, &inputs, |unit| {
        write_atomic(&unit.path, &unit.code)?;
        info!(path = %unit.path.display(), type_name = %unit.type_name, "wrote mock");
        Ok(())
    })
}

fn process_inputs<F>(
    config: &GeneratorConfig,
    inputs: &[PathBuf],
    mut sink: F,
) -> Result<RunSummary, GeneratorError>
where
    F: FnMut(&GeneratedUnit) -> Result<(), GeneratorError>,
{
    info!(
        input_dir = %config.input_dir.display(),
        files = inputs.len(),
        "found definition files"
    );

    let mut summary = RunSummary::default();
    for path in inputs {
        // One file at a time; the first error ends the run
        let units = generate_file(config, path)?;
        summary.files_processed += 1;

        for unit in &units {
            sink(unit)?;
            summary.outputs.push(unit.path.clone());
        }
    }

    Ok(summary)
}
