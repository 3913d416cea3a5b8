//! Inspection format lookup
//!
//!     A scanned token tree can be dumped in a small, fixed set of formats. The configured
//!     `inspect.format` and the CLI `--format` flag both name one of them, and the lookup is
//!     ASCII case-insensitive so `QUILL_INSPECT__FORMAT=JSON` works as well as `json`.
//!
//!     Formats are kept in listing order (`json`, `yaml`, `tag`). An unknown name is an error
//!     that carries the available names so the caller can report them.

use crate::quill::token::Token;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("unknown inspection format '{name}' (available: {available})")]
    UnknownFormat { name: String, available: String },
    #[error("could not serialize token tree: {0}")]
    Serialize(String),
}

/// One way of dumping a token tree as text
pub trait Formatter: Send + Sync {
    /// Name used in configuration and on the command line
    fn name(&self) -> &'static str;

    /// One line shown by `quill list-formats`
    fn description(&self) -> &'static str;

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError>;
}

/// The inspection formats a [Processor](crate::quill::processor::Processor) can dump
pub struct FormatRegistry {
    formatters: Vec<Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// `json`, `yaml` and `tag`
    pub fn builtin() -> Self {
        Self {
            formatters: vec![
                Box::new(super::JsonFormatter),
                Box::new(super::YamlFormatter),
                Box::new(super::TagFormatter),
            ],
        }
    }

    pub fn resolve(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        let name = name.trim();
        self.formatters
            .iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::UnknownFormat {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Dump `tokens` in the named format
    pub fn serialize(&self, tokens: &[Token], name: &str) -> Result<String, FormatError> {
        let formatter = self.resolve(name)?;
        tracing::debug!(format = formatter.name(), tokens = tokens.len(), "serializing token tree");
        formatter.serialize(tokens)
    }

    pub fn formats(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.formatters.iter().map(|f| f.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.name()).collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
