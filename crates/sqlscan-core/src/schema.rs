//! Compile-time generated descriptions of record types.
//!
//! `#[derive(Record)]` emits one [`Shape`] per record type. The shape is built
//! once per type and lives in a `static`, so every scan against the type reuses
//! it. Field order in a shape is declaration order and drives the order of the
//! derived column names.

mod field;
pub use field::{FieldKind, FieldShape};

mod shape;
pub use shape::Shape;

mod tag;
pub use tag::Tag;

pub(crate) mod step;
