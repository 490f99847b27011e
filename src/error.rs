//! Error types for path resolution and NDS transforms.
//!
//! Every failure is local to a single call and aborts it entirely: no
//! operation in this crate returns partial output alongside an error.
//!
//! ## Error Categories
//!
//! - **Path errors**: [`Error::InvalidPathSpec`], [`Error::PathResolution`], [`Error::Parse`]
//! - **Mapping errors**: [`Error::MappingConfig`], [`Error::MappingValue`]
//! - **Shape errors**: [`Error::ShapeLengthMismatch`], [`Error::DataValidation`]
//! - **Configuration errors**: [`Error::ConfigValidation`]
//! - **Template errors**: [`Error::TemplateConfig`], [`Error::TemplateValue`]
//!
//! Components publish errors as an [`ErrorObject`], the `{message, errorObj}`
//! shape consumers place on their error output.
//!
//! ## Examples
//!
//! ```rust
//! use nds_path::{path, nds, Error};
//!
//! let p = path::create(&nds!("/missing")).unwrap();
//! let err = p.resolve(&nds!({"present": 1})).unwrap_err();
//! assert!(matches!(err, Error::PathResolution { position: 0, .. }));
//! ```

use crate::{ParseKind, Value};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A path specification is structurally malformed.
    #[error("invalid path specification: {0}")]
    InvalidPathSpec(String),

    /// Descent through the data failed at token `position`.
    #[error("path resolution failed at token {position}: {reason}")]
    PathResolution { position: usize, reason: String },

    /// The resolved value could not be coerced to `kind`.
    #[error("cannot parse {found} as {kind}")]
    Parse { kind: ParseKind, found: String },

    /// The `src` of mapping rule `rule` could not be compiled.
    #[error("unexpected type in mappings at {rule}")]
    MappingConfig {
        rule: usize,
        #[source]
        source: Box<Error>,
    },

    /// Mapping rule `rule` could not be resolved against input element `element`.
    #[error("unable to map value with mapping config at {rule} for element {element}")]
    MappingValue {
        rule: usize,
        element: usize,
        #[source]
        source: Box<Error>,
    },

    /// A row (tuple data) or series (series data) differs in length from the first one.
    #[error("data at {at} has length {found}, expected the same length as the others ({expected})")]
    ShapeLengthMismatch {
        at: String,
        expected: usize,
        found: usize,
    },

    #[error("config is invalid: {0}")]
    ConfigValidation(String),

    #[error("data is invalid: {0}")]
    DataValidation(String),

    /// Template field `field` holds a path specification that could not be compiled.
    #[error("unexpected type in path token at {field}")]
    TemplateConfig {
        field: String,
        #[source]
        source: Box<Error>,
    },

    /// Template field `field` could not be resolved against record `element`.
    #[error("unable to map value with path at {field} for element {element}")]
    TemplateValue {
        field: String,
        element: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an [`Error::InvalidPathSpec`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nds_path::Error;
    ///
    /// let err = Error::invalid_path_spec("expected a string, array or object");
    /// assert!(err.to_string().starts_with("invalid path specification"));
    /// ```
    pub fn invalid_path_spec<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidPathSpec(msg.to_string())
    }

    pub fn path_resolution<T: fmt::Display>(position: usize, reason: T) -> Self {
        Error::PathResolution {
            position,
            reason: reason.to_string(),
        }
    }

    pub fn parse(kind: ParseKind, found: &Value) -> Self {
        Error::Parse {
            kind,
            found: found.to_string(),
        }
    }

    pub fn mapping_config(rule: usize, source: Error) -> Self {
        Error::MappingConfig {
            rule,
            source: Box::new(source),
        }
    }

    pub fn mapping_value(rule: usize, element: usize, source: Error) -> Self {
        Error::MappingValue {
            rule,
            element,
            source: Box::new(source),
        }
    }

    /// Creates an [`Error::ShapeLengthMismatch`] for the row/series identified by `at`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nds_path::Error;
    ///
    /// let err = Error::shape_length_mismatch("1", 2, 1);
    /// assert!(err.to_string().contains("at 1 has length 1"));
    /// ```
    pub fn shape_length_mismatch<T: fmt::Display>(at: T, expected: usize, found: usize) -> Self {
        Error::ShapeLengthMismatch {
            at: at.to_string(),
            expected,
            found,
        }
    }

    pub fn config_validation<T: fmt::Display>(msg: T) -> Self {
        Error::ConfigValidation(msg.to_string())
    }

    pub fn data_validation<T: fmt::Display>(msg: T) -> Self {
        Error::DataValidation(msg.to_string())
    }

    pub fn template_config(field: &str, source: Error) -> Self {
        Error::TemplateConfig {
            field: field.to_string(),
            source: Box::new(source),
        }
    }

    pub fn template_value(field: &str, element: usize, source: Error) -> Self {
        Error::TemplateValue {
            field: field.to_string(),
            element,
            source: Box::new(source),
        }
    }

    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for errors raised while validating configuration, as
    /// opposed to input data or resolution.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::ConfigValidation(_)
                | Error::MappingConfig { .. }
                | Error::TemplateConfig { .. }
                | Error::InvalidPathSpec(_)
        )
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The error shape a component publishes on its error output.
///
/// `message` is the top-level description; `error_obj` carries the underlying
/// cause when there is one.
///
/// # Examples
///
/// ```rust
/// use nds_path::{Error, ErrorObject, Value};
///
/// let cause = Error::path_resolution(0, "missing key \"a\"");
/// let err = Error::mapping_value(2, 1, cause);
/// let obj = ErrorObject::from(&err);
///
/// assert!(obj.message.contains("mapping config at 2"));
/// assert!(matches!(obj.error_obj, Some(Value::String(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorObject {
    pub message: String,
    #[serde(rename = "errorObj", skip_serializing_if = "Option::is_none")]
    pub error_obj: Option<Value>,
}

impl ErrorObject {
    pub fn new<T: fmt::Display>(message: T) -> Self {
        ErrorObject {
            message: message.to_string(),
            error_obj: None,
        }
    }

    #[must_use]
    pub fn with_error_obj(mut self, error_obj: Value) -> Self {
        self.error_obj = Some(error_obj);
        self
    }
}

impl From<&Error> for ErrorObject {
    fn from(err: &Error) -> Self {
        let obj = ErrorObject::new(err);
        match std::error::Error::source(err) {
            Some(cause) => obj.with_error_obj(Value::String(cause.to_string())),
            None => obj,
        }
    }
}

impl From<Error> for ErrorObject {
    fn from(err: Error) -> Self {
        ErrorObject::from(&err)
    }
}

impl fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_obj {
            Some(obj) => write!(f, "{} ({})", self.message, obj),
            None => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_object_without_cause() {
        let obj = ErrorObject::from(Error::config_validation("mappings is required"));
        assert_eq!(obj.message, "config is invalid: mappings is required");
        assert!(obj.error_obj.is_none());
    }

    #[test]
    fn test_error_object_serializes_camel_case() {
        let err = Error::mapping_config(1, Error::invalid_path_spec("bad token"));
        let json = serde_json::to_string(&ErrorObject::from(&err)).unwrap();
        assert_eq!(
            json,
            r#"{"message":"unexpected type in mappings at 1","errorObj":"invalid path specification: bad token"}"#
        );
    }

    #[test]
    fn test_config_error_classification() {
        assert!(Error::config_validation("x").is_config_error());
        assert!(!Error::data_validation("x").is_config_error());
        assert!(!Error::shape_length_mismatch("a", 1, 2).is_config_error());
    }
}
