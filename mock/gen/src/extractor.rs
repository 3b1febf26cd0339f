//! Struct extraction from definition files.
//!
//! A definition file is parsed with `syn` into a [`DefinitionFile`], and
//! [`extract`] walks its top-level items to collect every `struct` as a
//! [`RecordType`]. Field types are kept as the token trees the user wrote;
//! nothing is resolved or normalized.
//!
//! ## Examples
//!
//! ```
//! use mock_gen::extractor::extract;
//!
//! let file = syn::parse_file("pub struct Item { name: String, count: i32 }").unwrap();
//! let records = extract(&file);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].name, "Item");
//! assert_eq!(records[0].fields[1].method_stem(), "count");
//! assert_eq!(records[0].fields[1].type_text(), "i32");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{Fields, Generics, Ident, Item, ItemStruct, Member, Type};

use crate::errors::GeneratorError;

/// A parsed definition file.
#[derive(Debug, Clone)]
pub struct DefinitionFile {
    /// Where the file was read from.
    pub path: PathBuf,
    /// Module name of the file, taken from its stem.
    pub package: Ident,
    /// The parsed syntax tree.
    pub syntax: syn::File,
}

impl DefinitionFile {
    /// Returns the record types declared at the top level of this file.
    pub fn record_types(&self) -> Vec<RecordType> {
        extract(&self.syntax)
    }
}

/// One struct declared in a definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType {
    pub name: Ident,
    pub generics: Generics,
    /// Fields in declaration order.
    pub fields: Vec<FieldDecl>,
}

/// One field of a [`RecordType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field identifier, or its index for tuple structs.
    pub member: Member,
    /// Declared type, passed through verbatim.
    pub ty: Type,
}

impl FieldDecl {
    /// Name used to build the accessor method names.
    ///
    /// Raw identifiers lose their `r#` prefix so `r#type` yields
    /// `set_type`/`get_type`; tuple fields use their index.
    pub fn method_stem(&self) -> String {
        match &self.member {
            Member::Named(ident) => ident.unraw().to_string(),
            Member::Unnamed(index) => index.index.to_string(),
        }
    }

    /// The declared type rendered as text.
    pub fn type_text(&self) -> String {
        self.ty.to_token_stream().to_string()
    }
}

/// Reads and parses the definition file at `path`.
///
/// ## Errors
///
/// Returns `GeneratorError::ReadError` if the file cannot be read, and see
/// [`parse_definition`] for the remaining cases.
pub fn read_definition(path: &Path) -> Result<DefinitionFile, GeneratorError> {
    let source = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_definition(path, &source)
}

/// Parses `source` as the contents of the definition file at `path`.
///
/// ## Arguments
///
/// * `path` - Location of the file; its stem becomes the module name
/// * `source` - The file contents
///
/// ## Returns
///
/// The parsed [`DefinitionFile`].
///
/// ## Errors
///
/// - `GeneratorError::ParseError` if `source` is not a valid Rust file
/// - `GeneratorError::InvalidModuleName` if the file stem is not an identifier
pub fn parse_definition(path: &Path, source: &str) -> Result<DefinitionFile, GeneratorError> {
    let syntax = syn::parse_file(source).map_err(|e| GeneratorError::ParseError {
        path: path.display().to_string(),
        message: describe_parse_error(&e),
    })?;

    // The stem is imported by the generated file, so it must be an identifier
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let package = syn::parse_str::<Ident>(&stem).map_err(|_| GeneratorError::InvalidModuleName {
        path: path.display().to_string(),
        stem: stem.clone(),
    })?;

    Ok(DefinitionFile {
        path: path.to_path_buf(),
        package,
        syntax,
    })
}

/// Collects the top-level structs of `file`, in declaration order.
///
/// Items of any other kind are skipped, as are structs nested inside inline
/// modules or function bodies.
pub fn extract(file: &syn::File) -> Vec<RecordType> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(item_struct) => Some(record_type(item_struct)),
            _ => None,
        })
        .collect()
}

fn record_type(item: &ItemStruct) -> RecordType {
    let fields = match &item.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|field| {
                field.ident.as_ref().map(|ident| FieldDecl {
                    member: Member::Named(ident.clone()),
                    ty: field.ty.clone(),
                })
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(idx, field)| FieldDecl {
                member: Member::Unnamed(syn::Index::from(idx)),
                ty: field.ty.clone(),
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    RecordType {
        name: item.ident.clone(),
        generics: item.generics.clone(),
        fields,
    }
}

fn describe_parse_error(err: &syn::Error) -> String {
    let start = err.span().start();
    // Line 0 means the span carries no location (e.g. end of input)
    if start.line == 0 {
        err.to_string()
    } else {
        format!("{} (line {}, column {})", err, start.line, start.column + 1)
    }
}
