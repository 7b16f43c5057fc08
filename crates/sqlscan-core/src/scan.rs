//! Mapping between result columns and record fields.
//!
//! A record type describes itself with a [`Shape`]. Given an instance,
//! [`Record::fields_mut`] hands out one [`Target`] per field, borrowed
//! disjointly so that every field of the instance can be written during a
//! single scan. [`locate`] walks both in lockstep to build the field reference
//! map for a list of column names.

mod assign;
pub use assign::Assign;

mod columns;
pub use columns::{column_names, element_shape};

mod locate;
pub use locate::{locate, Targets};

use crate::schema::{FieldKind, Shape};

/// A type that can be the type of a record field.
///
/// Implemented for the supported scalar types, for `Option<T>` and `Box<T>`
/// of any field type, and by `#[derive(Record)]` for record types.
pub trait Field: Default + Send {
    /// Scalar, or record together with its shape.
    const KIND: FieldKind;

    /// Returns the writable target for this field.
    ///
    /// For `Option<R>` where `R` is a record, this allocates `R::default()`
    /// in place when the option is `None`.
    fn target(&mut self) -> Target<'_>;
}

/// A record type. Implemented by `#[derive(Record)]`.
pub trait Record: Field + 'static {
    /// The shape of this type, built once and cached.
    fn shape() -> &'static Shape;

    /// One target per field of the shape, in the same order.
    fn fields_mut(&mut self) -> Vec<Target<'_>>;
}

/// Object-safe view of a [`Record`], used when descending into nested
/// records whose concrete type is only known to the generated code.
pub trait DynRecord: Send {
    fn shape(&self) -> &'static Shape;

    fn targets(&mut self) -> Vec<Target<'_>>;
}

impl<R: Record> DynRecord for R {
    fn shape(&self) -> &'static Shape {
        <R as Record>::shape()
    }

    fn targets(&mut self) -> Vec<Target<'_>> {
        Record::fields_mut(self)
    }
}

/// A writable slot in a record instance.
pub enum Target<'a> {
    Scalar(&'a mut dyn Assign),
    Record(&'a mut dyn DynRecord),
}

impl core::fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Target::Scalar(_) => f.write_str("Target::Scalar"),
            Target::Record(record) => write!(f, "Target::Record({})", record.shape().name),
        }
    }
}

impl<T: Field> Field for Option<T> {
    const KIND: FieldKind = T::KIND;

    fn target(&mut self) -> Target<'_> {
        match T::KIND {
            FieldKind::Scalar => Target::Scalar(self),
            FieldKind::Record(_) => self.get_or_insert_with(T::default).target(),
        }
    }
}

impl<T: Field> Field for Box<T> {
    const KIND: FieldKind = T::KIND;

    fn target(&mut self) -> Target<'_> {
        T::target(&mut **self)
    }
}
