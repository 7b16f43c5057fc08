use super::Error;

/// Error when a result column has no matching field on the destination record.
///
/// This is the main signal that a query's result columns and the destination
/// type have drifted apart.
#[derive(Debug)]
pub(super) struct FieldNotFoundError {
    column: Box<str>,
}

impl std::error::Error for FieldNotFoundError {}

impl core::fmt::Display for FieldNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no matching record field found for column `{}`",
            self.column
        )
    }
}

impl Error {
    /// Creates a field not found error for the given result column.
    pub fn field_not_found(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FieldNotFound(FieldNotFoundError {
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a field not found error.
    pub fn is_field_not_found(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::FieldNotFound(_)))
    }

    /// Returns the offending column if this error is a field not found error.
    pub fn field_not_found_column(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::FieldNotFound(err) => Some(&*err.column),
            _ => None,
        })
    }
}
