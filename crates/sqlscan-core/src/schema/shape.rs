use super::{step::Step, FieldShape};
use crate::{Error, Result};

use std::sync::OnceLock;

/// The description of a record type: its fields in declaration order.
#[derive(Debug)]
pub struct Shape {
    /// Record type name
    pub name: &'static str,

    /// Record fields, in declaration order
    pub fields: Vec<FieldShape>,

    /// Memoized result of [`Shape::columns`]
    columns: OnceLock<Result<Vec<String>>>,
}

impl Shape {
    pub fn new(name: &'static str, fields: Vec<FieldShape>) -> Shape {
        Shape {
            name,
            fields,
            columns: OnceLock::new(),
        }
    }

    /// The column names this record expects, in order.
    ///
    /// Walks the shape depth-first: nested records contribute their leaves in
    /// place of the container field. Computed on first use and cached.
    ///
    /// Fails with an invalid argument error when the record contains itself
    /// through its nested records.
    pub fn columns(&self) -> Result<&[String]> {
        let columns = self.columns.get_or_init(|| {
            let mut columns = vec![];
            collect_columns(self, None, &mut vec![], &mut columns)?;
            Ok(columns)
        });

        match columns {
            Ok(columns) => Ok(columns),
            Err(err) => Err(err.clone()),
        }
    }

    /// Checks that descending from `self` through `field` into `nested` does
    /// not revisit a record already on the walk path.
    pub(crate) fn check_cycle(
        &self,
        field: &FieldShape,
        nested: &Shape,
        ancestors: &[&Shape],
    ) -> Result<()> {
        if std::ptr::eq(nested, self) || ancestors.iter().any(|a| std::ptr::eq(*a, nested)) {
            return Err(Error::invalid_argument(format!(
                "record `{}` contains itself through field `{}.{}`",
                nested.name, self.name, field.name
            )));
        }

        Ok(())
    }
}

fn collect_columns<'a>(
    shape: &'a Shape,
    prefix: Option<&str>,
    ancestors: &mut Vec<&'a Shape>,
    columns: &mut Vec<String>,
) -> Result<()> {
    for field in &shape.fields {
        match field.step(prefix) {
            Step::Skip => {}
            Step::Column(name) => columns.push(name),
            Step::Descend {
                shape: nested,
                prefix,
            } => {
                let nested = nested();
                shape.check_cycle(field, nested, ancestors)?;

                ancestors.push(shape);
                collect_columns(nested, prefix.as_deref(), ancestors, columns)?;
                ancestors.pop();
            }
        }
    }

    Ok(())
}
