//! Shared test utilities for mock-gen unit tests.

use proc_macro2::TokenStream;
use quote::quote;

use crate::extractor::{RecordType, extract};

/// Parses `source` and returns its first struct.
pub fn first_record(source: &str) -> RecordType {
    let file = syn::parse_file(source).expect("test source should parse");
    extract(&file)
        .into_iter()
        .next()
        .expect("test source should declare a struct")
}

/// Formats a token stream holding a complete file.
pub fn format_tokens(tokens: TokenStream) -> String {
    let file = syn::parse2::<syn::File>(tokens).expect("generated code should parse");
    prettyplease::unparse(&file)
}

/// Formats a token stream holding `impl` items by wrapping it in a dummy impl.
pub fn format_impl_body(items: TokenStream) -> String {
    format_tokens(quote! {
        impl Dummy {
            #items
        }
    })
}

/// Returns the names of every `pub fn` in formatted code, in order.
pub fn method_names(code: &str) -> Vec<String> {
    code.lines()
        .filter_map(|line| line.trim_start().strip_prefix("pub fn "))
        .filter_map(|rest| rest.split(['(', '<']).next())
        .map(str::to_string)
        .collect()
}
