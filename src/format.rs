//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for extracting stat blocks from source text and
//! for serializing single records back out.

use crate::error::FormatError;
use crate::statblock::StatBlock;

/// Trait for stat-block formats
///
/// Implementors provide conversion between a textual representation and the
/// [`StatBlock`] record. Formats can support parsing, serialization, or both.
/// Parsing is document-oriented (one source may embed several stat blocks,
/// so `parse` returns every record found, in document order) while
/// serialization is record-oriented and emits one block at a time.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, block: &StatBlock) -> Result<String, FormatError> {
///         // Serialize the record to a string
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "yaml", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → records)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (record → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Extract every stat block found in the source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<Vec<StatBlock>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize one stat block into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _block: &StatBlock) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
