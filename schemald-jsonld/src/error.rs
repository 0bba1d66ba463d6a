//! Error types for JSON-LD conversion.

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting entities and values.
///
/// Any error aborts conversion of the whole document. Errors raised below
/// the top level are wrapped in [`Error::Property`] / [`Error::Element`]
/// so the message carries a path; [`Error::root_cause`] strips them.
#[derive(Debug, Error)]
pub enum Error {
    /// A value of an undeclared type was offered to a container.
    #[error(transparent)]
    InvalidAlternativeType(#[from] schemald_values::Error),

    /// An object's `@type` names no declared entity alternative.
    #[error("unknown type discriminator {found:?}; expected one of [{expected}]")]
    UnknownTypeDiscriminator { found: String, expected: String },

    /// A JSON token fits none of the declared alternatives.
    #[error("JSON {token} matches none of [{expected}]")]
    ValueAlternativeMismatch {
        token: &'static str,
        expected: String,
    },

    /// A date, time or duration string failed to parse.
    #[error("malformed {format} value {text:?}")]
    MalformedScalarFormat { format: &'static str, text: String },

    /// NaN and infinities have no JSON representation.
    #[error("number {0} has no JSON representation")]
    NonFiniteNumber(f64),

    /// Strict decoding met a property the entity does not declare.
    #[error("unknown property {key:?} on {entity}")]
    UnknownProperty { entity: &'static str, key: String },

    /// Failure while converting one property of an entity.
    #[error("{entity}.{key}: {source}")]
    Property {
        entity: &'static str,
        key: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// Failure while converting one element of an array.
    #[error("[{index}]: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// Serialization/deserialization error from the JSON text layer.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns the innermost error, skipping property and element context.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Property { source, .. } | Error::Element { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub(crate) fn in_property(self, entity: &'static str, key: &'static str) -> Self {
        Error::Property {
            entity,
            key,
            source: Box::new(self),
        }
    }

    pub(crate) fn in_element(self, index: usize) -> Self {
        Error::Element {
            index,
            source: Box::new(self),
        }
    }
}

/// Short name of a JSON token's kind, used in diagnostics.
pub(crate) fn token_kind(token: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match token {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
