use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_shape(&self) -> TokenStream {
        let sqlscan = &self.sqlscan;
        let name = self.record.ident.to_string();

        let fields = self.record.fields.iter().map(|field| {
            let name = &field.name;
            let ty = &field.ty;
            let tag = match &field.attr.tag {
                Some(tag) => quote!(#sqlscan::Tag::new(#tag)),
                None => quote!(#sqlscan::Tag::Untagged),
            };
            let embedded = field.attr.embed.then(|| quote!(.embedded()));

            quote! {
                #sqlscan::FieldShape::new(
                    #name,
                    #tag,
                    <#ty as #sqlscan::Field>::KIND,
                )#embedded
            }
        });

        quote! {
            fn shape() -> &'static #sqlscan::Shape {
                static SHAPE: std::sync::OnceLock<#sqlscan::Shape> = std::sync::OnceLock::new();

                SHAPE.get_or_init(|| {
                    #sqlscan::Shape::new(#name, vec![#( #fields ),*])
                })
            }
        }
    }
}
