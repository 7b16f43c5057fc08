use super::Field;
use crate::{
    schema::{FieldKind, Shape},
    Error, Result,
};

use std::any::type_name;

/// The column names expected by destination type `T`, from its cached shape.
///
/// Fails with an invalid argument error when `T` is not a record or when its
/// record contains itself.
pub fn column_names<T: Field>() -> Result<&'static [String]> {
    match T::KIND {
        FieldKind::Record(shape) => shape().columns(),
        FieldKind::Scalar => Err(Error::invalid_argument(format!(
            "destination `{}` is not a record",
            type_name::<T>()
        ))),
    }
}

/// The shape of collection element type `E`.
///
/// `E` may be a record or an `Option`/`Box` of one. Anything else fails with a
/// no matching type error.
pub fn element_shape<E: Field>() -> Result<&'static Shape> {
    match E::KIND {
        FieldKind::Record(shape) => Ok(shape()),
        FieldKind::Scalar => Err(Error::no_matching_type(type_name::<E>())),
    }
}
