//! HTML format implementation (parsing only)
//!
//! Extracts stat-block records from rendered HTML pages. This is an
//! import-only format: there is no serialization back to HTML.
//!
//! # Data Model
//!
//! Field sources inside a `mon-stat-block` fragment:
//!
//! | Record field | Source nodes |
//! |--------------|--------------|
//! | name | `mon-stat-block__name-link` text |
//! | size/type/subtype/alignment | `mon-stat-block__meta` line, pattern-split |
//! | hp, ac, speed (+ extras) | attribute label/value/extra triples |
//! | ability scores/modifiers | `ability-block__heading` keyed groups |
//! | saves, skills, senses, ..., challenge | tidbit label/value pairs |
//! | traits/actions/... | description blocks, segmented on emphasized runs |
//!
//! # Architecture
//!
//! The parser walks an `RcDom` tree directly; `dom` holds the generic
//! traversal helpers and `parser` the class-keyed field scans plus the
//! record builder. One page may carry several stat blocks, so parsing
//! returns every fragment's record in document order.

pub mod dom;
pub mod parser;

use crate::error::FormatError;
use crate::format::Format;
use crate::statblock::StatBlock;
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::RcDom;

/// HTML import format for stat-block pages
#[derive(Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Rendered stat-block HTML (import only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, source: &str) -> Result<Vec<StatBlock>, FormatError> {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source);
        Ok(parser::find_stat_blocks(&dom.document)
            .iter()
            .map(parser::parse_stat_block)
            .collect())
    }
}
