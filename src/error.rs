//! Error types for format conversions

use std::fmt;

/// Error type for format parsing and serialization
///
/// Note that a field that cannot be located in a source document is not an
/// error: field-level absence propagates as `None` through the record.
/// `FormatError` covers format-level misuse (an unsupported direction, an
/// unknown format name) and serializer failures.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The source text could not be parsed
    ParseError(String),
    /// The record could not be serialized
    SerializationError(String),
    /// The format does not support the requested operation
    NotSupported(String),
    /// No format registered under the requested name
    FormatNotFound(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            FormatError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            FormatError::NotSupported(msg) => write!(f, "Not supported: {}", msg),
            FormatError::FormatNotFound(name) => write!(f, "Format not found: {}", name),
        }
    }
}

impl std::error::Error for FormatError {}
