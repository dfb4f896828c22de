//! Stat-block extraction and serialization
//!
//!     This crate pulls structured monster records out of rendered stat-block
//!     HTML and serializes them to two textual formats: an indented
//!     YAML-style layout for statblock note plugins and a plain JSON record.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all formats (parsing and/or
//!       serialization); see [./format.rs]
//!     - FormatRegistry: centralized discovery and selection of formats
//!     - StatBlock: the flat record every format converts to or from; a
//!       field that could not be located is None and produces no output
//!
//!     This is a pure lib: it powers the statblock binary but is shell
//!     agnostic, that is no code should be written here that supposes a
//!     shell environment, be it to std print, env vars etc.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── statblock
//!     │   └── mod.rs              # StatBlock, AbilityScores, Score, Bonus, Ability
//!     ├── formats
//!     │   ├── html                # import: dom.rs helpers + parser.rs scans
//!     │   ├── yaml                # export: serializer.rs text layout
//!     │   └── json                # export: serde_json passthrough
//!     └── lib.rs
//!
//! Error model
//!
//!     A field missing from a source document is not an error: every failed
//!     lookup resolves to None and absence propagates through the record.
//!     FormatError only covers format-level misuse and serializer failures,
//!     so a build never aborts halfway through a fragment.
//!
//! Testing
//!
//!     Unit tests live next to their modules; integration tests under
//!     tests/ drive whole fixtures through the registry (fixture pages in
//!     tests/fixtures). Encoder output is snapshot-tested and checked for
//!     YAML validity with a real YAML parser.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod statblock;

pub use error::FormatError;
pub use format::Format;
pub use formats::{HtmlFormat, JsonFormat, YamlFormat};
pub use registry::FormatRegistry;
pub use statblock::{Ability, AbilityScores, Bonus, Score, StatBlock, TypeInfo};
