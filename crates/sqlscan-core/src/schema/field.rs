use super::{Shape, Tag};

/// Whether a field holds a single column value or a nested record.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Scalar,

    /// A nested record. The function returns the nested type's shape.
    Record(fn() -> &'static Shape),
}

impl FieldKind {
    pub fn is_record(&self) -> bool {
        matches!(self, FieldKind::Record(_))
    }
}

/// One field of a record shape.
#[derive(Debug, Clone)]
pub struct FieldShape {
    /// Declared field name
    pub name: &'static str,

    /// Declared `db` tag
    pub tag: Tag,

    /// Scalar or nested record
    pub kind: FieldKind,

    /// True for `#[db(embed)]` fields: composition rather than a named nesting.
    ///
    /// An untagged embed is transparent, so its columns keep the enclosing
    /// prefix. A tagged embed ignores the enclosing prefix and starts a new
    /// one from its tag. Nested under `#[db("doc")]`, a `Document` with an
    /// untagged `meta` embed and a `#[db("body", embed)]` field yields
    /// `doc_version` but `body_street`.
    pub embedded: bool,
}

impl FieldShape {
    pub fn new(name: &'static str, tag: Tag, kind: FieldKind) -> FieldShape {
        FieldShape {
            name,
            tag,
            kind,
            embedded: false,
        }
    }

    /// Marks the field as `#[db(embed)]`. See the `embedded` field for
    /// how embeds are prefixed.
    pub fn embedded(mut self) -> FieldShape {
        self.embedded = true;
        self
    }

    /// The tag in effect: the explicit tag, or the field name when untagged.
    /// `None` for the `"-"` sentinel.
    pub fn effective_tag(&self) -> Option<&'static str> {
        match self.tag {
            Tag::Untagged => Some(self.name),
            Tag::Dash => None,
            Tag::Named(tag) => Some(tag),
        }
    }
}
