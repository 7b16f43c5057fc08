use super::Error;

/// Error when the element type of a multi-record destination is neither a
/// record nor an owned reference to one.
#[derive(Debug)]
pub(super) struct NoMatchingTypeError {
    element: &'static str,
}

impl std::error::Error for NoMatchingTypeError {}

impl core::fmt::Display for NoMatchingTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no matching type: elements of type `{}` are neither records nor references to records",
            self.element
        )
    }
}

impl Error {
    /// Creates a no matching type error for the named element type.
    pub fn no_matching_type(element: &'static str) -> Error {
        Error::from(super::ErrorKind::NoMatchingType(NoMatchingTypeError {
            element,
        }))
    }

    /// Returns `true` if this error is a no matching type error.
    pub fn is_no_matching_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NoMatchingType(_)))
    }
}
