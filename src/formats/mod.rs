//! Format implementations
//!
//! One module per format. Each exposes a unit struct implementing
//! [`crate::format::Format`]; parsing-capable formats keep their extraction
//! code in a `parser` submodule and serializing formats their emission code
//! in a `serializer` submodule.

pub mod html;
pub mod json;
pub mod yaml;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use yaml::YamlFormat;
