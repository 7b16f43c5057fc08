use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Destructures `self` so that every scanned field is borrowed at once.
    pub(super) fn expand_fields_mut(&self) -> TokenStream {
        let sqlscan = &self.sqlscan;
        let idents: Vec<_> = self.record.fields.iter().map(|field| &field.ident).collect();

        quote! {
            fn fields_mut(&mut self) -> Vec<#sqlscan::Target<'_>> {
                let Self { #( #idents, )* .. } = self;
                vec![#( #sqlscan::Field::target(#idents) ),*]
            }
        }
    }
}
