//! Error types for the fallible outer surfaces.
//!
//! Scanning and rendering never fail. Errors only come from reading input, loading
//! configuration and serializing token trees.

use thiserror::Error;

use crate::quill::formats::FormatError;

#[derive(Debug, Error)]
pub enum QuillError {
    /// I/O error while reading a source document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Token tree inspection failed.
    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, QuillError>;
