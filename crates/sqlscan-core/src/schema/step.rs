use super::{FieldKind, FieldShape, Shape};

/// What a tree walk does with one field, given the prefix active in its
/// record.
///
/// Both the column name deriver and the field locator walk a shape with this
/// one rule, which keeps the names they produce identical.
#[derive(Debug, PartialEq)]
pub(crate) enum Step {
    /// The field contributes no column.
    Skip,

    /// The field is the column with this name.
    Column(String),

    /// The field is a record; walk its shape with `prefix` active.
    Descend {
        shape: fn() -> &'static Shape,
        prefix: Option<String>,
    },
}

impl FieldShape {
    pub(crate) fn step(&self, prefix: Option<&str>) -> Step {
        let Some(tag) = self.effective_tag() else {
            // `"-"` flattens records and excludes scalars
            return match self.kind {
                FieldKind::Record(shape) => Step::Descend {
                    shape,
                    prefix: prefix.map(str::to_owned),
                },
                FieldKind::Scalar => Step::Skip,
            };
        };

        if let FieldKind::Record(shape) = self.kind {
            if self.embedded && !self.tag.is_explicit() {
                return Step::Descend {
                    shape,
                    prefix: prefix.map(str::to_owned),
                };
            }
        }

        let name = match prefix {
            Some(prefix) if !self.embedded => format!("{prefix}_{tag}"),
            _ => tag.to_string(),
        };

        match self.kind {
            FieldKind::Record(shape) => Step::Descend {
                shape,
                prefix: Some(name),
            },
            FieldKind::Scalar => Step::Column(name),
        }
    }
}
