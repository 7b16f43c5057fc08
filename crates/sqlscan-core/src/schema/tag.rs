/// The `db` tag declared on a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// No tag, or an empty one. The declared field name stands in for it.
    Untagged,

    /// The `"-"` sentinel. Flattens a record field into its parent and
    /// excludes a scalar field.
    Dash,

    /// An explicit column name, also used as the prefix segment for the
    /// columns of a nested record.
    Named(&'static str),
}

impl Tag {
    pub const fn new(tag: &'static str) -> Tag {
        match tag.as_bytes() {
            [] => Tag::Untagged,
            [b'-'] => Tag::Dash,
            _ => Tag::Named(tag),
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, Tag::Named(_))
    }
}
