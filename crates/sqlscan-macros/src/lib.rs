extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `Record`, describing a struct's fields for scanning.
///
/// Field options go in a `#[db(..)]` attribute: a tag string naming the
/// column (`"-"` to flatten a nested record or exclude a scalar), `embed` to
/// mark an embedded record, and `skip` to leave a field out.
#[proc_macro_derive(Record, attributes(db))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match sqlscan_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
