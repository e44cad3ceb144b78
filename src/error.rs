//! Error types raised while constructing diagrams.
//!
//! Rendering never fails: once a diagram value exists it always renders. All
//! failures surface synchronously at the builder call that caused them, and a
//! failed call leaves the builder exactly as it was.

use thiserror::Error;

/// The error type for diagram construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required text field was empty or held only whitespace, or a value was
    /// outside the range the diagram language accepts.
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    /// A style axis was supplied that the element's dialect cannot express,
    /// e.g. a text color on an element that only takes a background color.
    #[error("{element} does not support {axis} styling")]
    UnsupportedStyle {
        element: &'static str,
        axis: &'static str,
    },

    /// A JSON or YAML payload could not be serialized.
    #[error("could not serialize diagram data: {0}")]
    Serialization(String),
}

impl Error {
    pub(crate) fn empty(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "must not be empty or whitespace",
        }
    }

    pub(crate) fn unsupported(element: &'static str, axis: &'static str) -> Self {
        Self::UnsupportedStyle { element, axis }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience alias used across the builders.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_the_field() {
        let err = Error::empty("action text");
        assert_eq!(
            err.to_string(),
            "invalid action text: must not be empty or whitespace"
        );
    }

    #[test]
    fn test_unsupported_style_message() {
        let err = Error::unsupported("swimlane", "text color");
        assert_eq!(err.to_string(), "swimlane does not support text color styling");
    }
}
