//! Error types for value export.
//!
//! Rendering itself is total: every [`Value`](crate::Value) kind has a defined
//! textual form. Errors only surface when a contract is broken at one of the
//! crate's seams:
//!
//! - **Unsupported kind**: the identity tracker ([`Context`](crate::Context)) was
//!   asked to track something other than a sequence or a record
//! - **Object not supported**: an [`ObjectExporter`](crate::ObjectExporter) chain
//!   was consulted and no member handled the record
//! - **Custom**: the serde bridge met an input it cannot map to a value
//!
//! ## Examples
//!
//! ```rust
//! use value_exporter::{Context, Error, Value};
//!
//! let mut context = Context::new();
//! let result = context.add(&Value::from(42));
//! assert!(matches!(result, Err(Error::UnsupportedKind(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the exporter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Only sequences and records carry an identity that can be tracked
    #[error("Unsupported kind: only sequences and records can be tracked, got {0}")]
    UnsupportedKind(String),

    /// No object exporter in the configured chain handles the record
    #[error("Object not supported: no object exporter handles {0}")]
    ObjectNotSupported(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported kind error naming the offending kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_exporter::Error;
    ///
    /// let err = Error::unsupported_kind("int");
    /// assert!(err.to_string().contains("got int"));
    /// ```
    pub fn unsupported_kind(kind: &str) -> Self {
        Error::UnsupportedKind(kind.to_string())
    }

    /// Creates an object-not-supported error naming the record's type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_exporter::Error;
    ///
    /// let err = Error::object_not_supported("Invoice Object #7");
    /// assert!(err.to_string().contains("Invoice Object #7"));
    /// ```
    pub fn object_not_supported(description: &str) -> Self {
        Error::ObjectNotSupported(description.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_culprit() {
        assert_eq!(
            Error::unsupported_kind("string").to_string(),
            "Unsupported kind: only sequences and records can be tracked, got string"
        );
        assert_eq!(
            Error::object_not_supported("Money Object #3").to_string(),
            "Object not supported: no object exporter handles Money Object #3"
        );
        assert_eq!(Error::custom("boom").to_string(), "Error: boom");
    }

    #[test]
    fn test_serde_error_maps_to_custom() {
        let err = <Error as serde::ser::Error>::custom("key must be a scalar");
        assert_eq!(err, Error::Custom("key must be a scalar".to_string()));
    }
}
