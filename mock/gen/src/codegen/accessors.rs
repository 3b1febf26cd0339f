//! Accessor generation for struct fields.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::extractor::FieldDecl;

/// Generates the write and read methods for one field.
///
/// The setter comes first, then the getter. The field type is emitted
/// exactly as it was declared; the getter returns a clone so it works for
/// any `Clone` field without borrowing.
///
/// ## Examples
///
/// For `name: String`:
/// ```ignore
/// pub fn set_name(&mut self, value: String) {
///     self.name = value;
/// }
///
/// pub fn get_name(&self) -> String {
///     self.name.clone()
/// }
/// ```
///
/// Tuple struct fields are addressed by position, so field `0` yields
/// `set_0`/`get_0` operating on `self.0`.
pub fn generate_accessor_pair(field: &FieldDecl) -> TokenStream {
    let member = &field.member;
    let ty = &field.ty;
    let stem = field.method_stem();
    let setter = format_ident!("set_{}", stem);
    let getter = format_ident!("get_{}", stem);
    let set_doc = format!(" Sets the `{}` field.", stem);
    let get_doc = format!(" Returns the `{}` field.", stem);

    quote! {
        #[doc = #set_doc]
        pub fn #setter(&mut self, value: #ty) {
            self.#member = value;
        }

        #[doc = #get_doc]
        pub fn #getter(&self) -> #ty {
            self.#member.clone()
        }
    }
}
