//! Assembly of the complete generated file for one struct.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::codegen::{generate_accessor_pair, generate_execute_stub, generate_query_stub};
use crate::extractor::RecordType;

/// Synthesizes the generated file for `record`, declared in module `package`.
///
/// The output contains, in order:
/// - a module doc naming the source type
/// - `use crate::<package>;`
/// - one `impl` block on `<package>::<Type>` holding a setter and getter per
///   field (declaration order) followed by `query()` and `execute()`
///
/// A struct with N fields therefore yields 2N + 2 methods. Generic
/// parameters and where clauses are carried onto the `impl`.
///
/// ## Examples
///
/// For `struct Item { name: String }` in `item.rs`:
/// ```ignore
/// //! Accessors and stubs for [`item::Item`].
/// use crate::item;
///
/// impl item::Item {
///     pub fn set_name(&mut self, value: String) { self.name = value; }
///     pub fn get_name(&self) -> String { self.name.clone() }
///     pub fn query(&self) -> String { String::new() }
///     pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> { Ok(()) }
/// }
/// ```
pub fn synthesize(package: &Ident, record: &RecordType) -> TokenStream {
    let name = &record.name;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();
    let module_doc = format!(" Accessors and stubs for [`{}::{}`].", package, name);

    let accessors: TokenStream = record.fields.iter().map(generate_accessor_pair).collect();
    let query = generate_query_stub();
    let execute = generate_execute_stub();

    quote! {
        #![doc = #module_doc]

        use crate::#package;

        impl #impl_generics #package::#name #ty_generics #where_clause {
            #accessors

            #query

            #execute
        }
    }
}
