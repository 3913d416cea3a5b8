//! Processing API for quill documents
//!
//! Runs the full pipeline (scan, then render) in one call and exposes token
//! tree inspection through the [format registry](crate::quill::formats).
//!
//! ```rust,ignore
//! use quill::Processor;
//!
//! let processor = Processor::default();
//! let processed = processor.process("# Title\n\nHello *world*");
//! println!("{}", processed.html);
//!
//! let tree = processor.inspect("# Title", "tag")?;
//! ```

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::quill::config::QuillConfig;
use crate::quill::error::Result;
use crate::quill::formats::{FormatError, FormatRegistry};
use crate::quill::rendering::HtmlRenderer;
use crate::quill::scanning::scan;
use crate::quill::token::Token;

/// Output of one pipeline run
#[derive(Debug, Clone)]
pub struct Processed {
    pub tokens: Vec<Token>,
    pub html: String,
    pub scan_time: Duration,
    pub render_time: Duration,
}

/// Scans and renders documents with a fixed configuration
pub struct Processor {
    config: QuillConfig,
    renderer: HtmlRenderer,
    registry: FormatRegistry,
}

impl Processor {
    pub fn new(config: QuillConfig) -> Self {
        Self {
            renderer: HtmlRenderer::new(config.render),
            config,
            registry: FormatRegistry::builtin(),
        }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Scan and render `source`, timing each stage
    pub fn process(&self, source: &str) -> Processed {
        let started = Instant::now();
        let tokens = scan(source);
        let scan_time = started.elapsed();

        let started = Instant::now();
        let html = self.renderer.render(&tokens);
        let render_time = started.elapsed();

        tracing::debug!(
            source_bytes = source.len(),
            tokens = tokens.len(),
            scan_us = scan_time.as_micros() as u64,
            render_us = render_time.as_micros() as u64,
            "processed document"
        );

        Processed {
            tokens,
            html,
            scan_time,
            render_time,
        }
    }

    /// Read a file and process it
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<Processed> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), bytes = source.len(), "read source");
        Ok(self.process(&source))
    }

    /// Scan `source` and serialize the token tree in the named format
    pub fn inspect(&self, source: &str, format: &str) -> std::result::Result<String, FormatError> {
        self.registry.serialize(&scan(source), format)
    }

    /// Like [Processor::inspect] with the configured `inspect.format`
    pub fn inspect_default(&self, source: &str) -> std::result::Result<String, FormatError> {
        self.inspect(source, &self.config.inspect.format)
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(QuillConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quill::token::TokenKind;

    #[test]
    fn test_process_runs_both_stages() {
        let processed = Processor::default().process("# Title\n\nHello *world*");
        assert_eq!(processed.tokens.len(), 3);
        assert_eq!(processed.tokens[0].kind(), TokenKind::Header1);
        assert_eq!(processed.html, "<h1>Title</h1>\n<p>Hello <em>world</em></p>");
    }

    #[test]
    fn test_process_uses_render_config() {
        let mut config = QuillConfig::default();
        config.render.external_anchor = true;
        let processed = Processor::new(config).process("[a](b)");
        assert_eq!(processed.html, "<p><a href=\"b\" target=\"_blank\">a</a></p>");
    }

    #[test]
    fn test_inspect_unknown_format() {
        let result = Processor::default().inspect("x", "xml");
        assert!(matches!(
            result,
            Err(FormatError::UnknownFormat { ref name, .. }) if name == "xml"
        ));
    }

    #[test]
    fn test_inspect_default_format_is_json() {
        let output = Processor::default().inspect_default("x").unwrap();
        assert!(output.trim_start().starts_with('['));
    }

    #[test]
    fn test_inspect_default_follows_config() {
        let mut config = QuillConfig::default();
        config.inspect.format = "TAG".to_string();
        let output = Processor::new(config).inspect_default("x").unwrap();
        assert!(output.starts_with("<document>"));
    }

    #[test]
    fn test_process_missing_file() {
        let result = Processor::default().process_file("/definitely/not/here.md");
        assert!(result.is_err());
    }
}
