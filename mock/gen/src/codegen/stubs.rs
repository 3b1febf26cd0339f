//! Fixed stub methods attached to every generated type.

use proc_macro2::TokenStream;
use quote::quote;

/// Generates the `query()` stub, which returns an empty query.
pub fn generate_query_stub() -> TokenStream {
    quote! {
        /// Implement your query generation logic here.
        pub fn query(&self) -> String {
            String::new()
        }
    }
}

/// Generates the `execute()` stub, which always succeeds.
pub fn generate_execute_stub() -> TokenStream {
    quote! {
        /// Implement your query execution logic here.
        pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
            Ok(())
        }
    }
}
