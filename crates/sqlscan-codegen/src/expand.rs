mod fields;
mod shape;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for sqlscan types
    sqlscan: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let sqlscan = &self.sqlscan;
        let ident = &self.record.ident;
        let shape = self.expand_shape();
        let fields_mut = self.expand_fields_mut();

        wrap_in_const(quote! {
            impl #sqlscan::Record for #ident {
                #shape
                #fields_mut
            }

            impl #sqlscan::Field for #ident {
                const KIND: #sqlscan::FieldKind =
                    #sqlscan::FieldKind::Record(<#ident as #sqlscan::Record>::shape);

                fn target(&mut self) -> #sqlscan::Target<'_> {
                    #sqlscan::Target::Record(self)
                }
            }
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        sqlscan: quote!(_sqlscan::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use sqlscan as _sqlscan;
            #code
        };
    }
}
