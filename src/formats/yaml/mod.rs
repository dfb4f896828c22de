//! YAML-style text format implementation (serialization only)
//!
//! Emits the indented `key: value` layout used by statblock note plugins.
//! The layout is deliberately hand-built rather than produced by a generic
//! YAML emitter: the field order, the bracketed `stats` line, and the
//! delimiter-stripped `hit_dice` value are all fixed parts of the target
//! shape. There is no parsing from this format back to records.

pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::statblock::StatBlock;

/// YAML-style text output format
#[derive(Default)]
pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "Indented statblock text (export only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn supports_parsing(&self) -> bool {
        false
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, block: &StatBlock) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_text(block))
    }
}
