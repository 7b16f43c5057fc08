use super::Error;
use crate::stmt::{Type, Value};

/// Error when a value cannot be assigned to a field of the expected type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    from_type: Type,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {:?} to {}", self.from_type, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error for a value that does not fit `to_type`.
    pub fn type_conversion(value: Value, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            from_type: value.infer_ty(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TypeConversion(_)))
    }
}
