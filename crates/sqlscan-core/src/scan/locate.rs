use super::{Assign, Field, Target};
use crate::{
    schema::{step::Step, Shape},
    stmt::ValueRecord,
    Error, Result,
};

use indexmap::IndexMap;
use std::any::type_name;

/// Writable field references for one destination, ordered to match the
/// columns of a result set.
pub struct Targets<'a> {
    /// Every scalar field reachable from the destination
    slots: Vec<&'a mut dyn Assign>,

    /// For each result column, the index of the slot it writes
    order: Vec<usize>,

    columns: Vec<String>,
}

/// Builds the field reference map for `dest` and orders it by `columns`.
///
/// Nested records held in `Option` are allocated in place while walking, so
/// their fields can be located.
pub fn locate<'a, T: Field>(dest: &'a mut T, columns: &[String]) -> Result<Targets<'a>> {
    let Target::Record(record) = dest.target() else {
        return Err(Error::invalid_argument(format!(
            "destination `{}` is not a record",
            type_name::<T>()
        )));
    };

    let mut map = FieldMap::default();
    let shape = record.shape();
    map.collect(shape, record.targets(), None, &mut vec![])?;
    map.resolve(columns)
}

#[derive(Default)]
struct FieldMap<'a> {
    index: IndexMap<String, usize>,
    slots: Vec<&'a mut dyn Assign>,
}

impl<'a> FieldMap<'a> {
    fn collect(
        &mut self,
        shape: &'static Shape,
        targets: Vec<Target<'a>>,
        prefix: Option<&str>,
        ancestors: &mut Vec<&'static Shape>,
    ) -> Result<()> {
        if targets.len() != shape.fields.len() {
            return Err(Error::invalid_argument(format!(
                "`{}` has {} fields but its shape describes {}",
                shape.name,
                targets.len(),
                shape.fields.len()
            )));
        }

        for (field, target) in shape.fields.iter().zip(targets) {
            match (field.step(prefix), target) {
                (Step::Skip, _) => {}
                (Step::Column(name), Target::Scalar(slot)) => self.insert(name, slot)?,
                (Step::Descend { prefix, .. }, Target::Record(record)) => {
                    // Checked before `targets`, which allocates optional records
                    let nested = record.shape();
                    shape.check_cycle(field, nested, ancestors)?;

                    ancestors.push(shape);
                    self.collect(nested, record.targets(), prefix.as_deref(), ancestors)?;
                    ancestors.pop();
                }
                _ => {
                    return Err(Error::invalid_argument(format!(
                        "field `{}.{}` does not match its shape",
                        shape.name, field.name
                    )))
                }
            }
        }

        Ok(())
    }

    fn insert(&mut self, name: String, slot: &'a mut dyn Assign) -> Result<()> {
        if self.index.contains_key(&name) {
            return Err(Error::invalid_argument(format!(
                "column `{name}` is mapped by more than one field"
            )));
        }

        self.index.insert(name, self.slots.len());
        self.slots.push(slot);
        Ok(())
    }

    fn resolve(self, columns: &[String]) -> Result<Targets<'a>> {
        let mut order = Vec::with_capacity(columns.len());

        for column in columns {
            match self.index.get(column) {
                Some(&slot) => order.push(slot),
                None => return Err(Error::field_not_found(column.as_str())),
            }
        }

        Ok(Targets {
            slots: self.slots,
            order,
            columns: columns.to_vec(),
        })
    }
}

impl Targets<'_> {
    /// Number of result columns these targets accept.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Writes one row's values, positionally, into the located fields.
    pub fn assign(&mut self, record: ValueRecord) -> Result<()> {
        if record.len() != self.order.len() {
            return Err(Error::invalid_result(format!(
                "row has {} values but {} fields were located",
                record.len(),
                self.order.len()
            )));
        }

        for ((value, &slot), column) in record.into_iter().zip(&self.order).zip(&self.columns) {
            self.slots[slot]
                .assign(value)
                .map_err(|err| err.context(err!("column `{column}`")))?;
        }

        Ok(())
    }
}

impl core::fmt::Debug for Targets<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Targets")
            .field("columns", &self.columns)
            .field("order", &self.order)
            .finish()
    }
}
