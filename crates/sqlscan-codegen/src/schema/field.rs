use super::{DbAttr, ErrorSet};

use syn::{ext::IdentExt, visit::Visit};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier, as written (possibly raw)
    pub(crate) ident: syn::Ident,

    /// Declared name, used when the field has no tag
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Parsed `#[db(..)]` attribute
    pub(crate) attr: DbAttr,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, record_ident: &syn::Ident) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attr = None;

        for node in &field.attrs {
            if !node.path().is_ident("db") {
                continue;
            }

            if attr.is_some() {
                errs.push(syn::Error::new_spanned(node, "duplicate #[db] attribute"));
                continue;
            }

            match DbAttr::from_ast(node) {
                Ok(parsed) => attr = Some(parsed),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let attr = attr.unwrap_or_default();

        if !attr.skip && mentions(&field.ty, record_ident) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "recursive record fields are not supported",
            ));
        }

        Ok(Field {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            attr,
        })
    }
}

/// Returns `true` if `ty` refers to `Self` or to the record being derived.
fn mentions(ty: &syn::Type, record_ident: &syn::Ident) -> bool {
    struct Finder<'a> {
        record_ident: &'a syn::Ident,
        found: bool,
    }

    impl<'ast> Visit<'ast> for Finder<'_> {
        fn visit_path_segment(&mut self, segment: &'ast syn::PathSegment) {
            if segment.ident == "Self" || segment.ident == *self.record_ident {
                self.found = true;
            }
            syn::visit::visit_path_segment(self, segment);
        }
    }

    let mut finder = Finder {
        record_ident,
        found: false,
    };
    finder.visit_type(ty);
    finder.found
}
