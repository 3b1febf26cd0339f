//! Code generation for mock companion files.
//!
//! Each submodule produces one piece of the generated file as a
//! `proc_macro2::TokenStream`:
//!
//! - [`accessors`] - the `set_<field>`/`get_<field>` pair for one field
//! - [`stubs`] - the fixed `query()` and `execute()` methods
//! - [`unit`] - the complete file for one struct
//!
//! The assembled tokens are validated and formatted by [`crate::output`].

pub mod accessors;
pub mod stubs;
pub mod unit;

pub use accessors::generate_accessor_pair;
pub use stubs::{generate_execute_stub, generate_query_stub};
pub use unit::synthesize;
