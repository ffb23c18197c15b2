//! Error types produced while validating a varied definition.

use thiserror::Error;

/// Errors that can occur while validating a definition's structure.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum DefinitionError {
    /// The definition is not a JSON object.
    #[error("definition must be a JSON object")]
    NotAnObject,

    /// The definition has no object payload under the `default` key.
    #[error("definition is missing the \"default\" variant")]
    MissingDefault,

    /// The `default` payload lacks a non-empty `name` string.
    #[error("\"default\" variant is missing a non-empty \"name\" string")]
    MissingName,
}

/// Convenience alias for fallible operations over definitions.
pub type DefinitionResult<T> = Result<T, DefinitionError>;
