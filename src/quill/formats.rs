//! Output format implementations for token tree inspection
//!
//! This module contains the formats used to display a scanned token tree:
//! - `json`: pretty printed JSON
//! - `yaml`: YAML
//! - `tag`: an XML-like indented tree

pub mod registry;
pub mod serde_formats;
pub mod tag;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use tag::{serialize_tokens as serialize_tag, TagFormatter};
