/// The contents of a `#[db(..)]` field attribute.
#[derive(Debug, Default)]
pub(crate) struct DbAttr {
    /// Column tag; `"-"` flattens records and excludes scalars
    pub(crate) tag: Option<syn::LitStr>,

    /// The field is an embedded record
    pub(crate) embed: bool,

    /// The field is not scanned
    pub(crate) skip: bool,
}

mod kw {
    syn::custom_keyword!(embed);
    syn::custom_keyword!(skip);
}

impl DbAttr {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<DbAttr> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for DbAttr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self::default();

        // Allowed syntax:
        //
        // #[db("name")]
        // #[db(embed)]
        // #[db("name", embed)]
        // #[db(skip)]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.tag.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate field tag"));
                }
                result.tag = Some(input.parse()?);
            } else if lookahead.peek(kw::embed) {
                let kw: kw::embed = input.parse()?;
                if result.embed {
                    return Err(syn::Error::new_spanned(kw, "duplicate `embed` option"));
                }
                result.embed = true;
            } else if lookahead.peek(kw::skip) {
                let kw: kw::skip = input.parse()?;
                if result.skip {
                    return Err(syn::Error::new_spanned(kw, "duplicate `skip` option"));
                }
                result.skip = true;
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        if result.skip && (result.embed || result.tag.is_some()) {
            return Err(syn::Error::new(
                input.span(),
                "`skip` cannot be combined with other options",
            ));
        }

        Ok(result)
    }
}
