//! Renderer
//!
//!     Walks a scanned token tree and produces one HTML string. The renderer never calls back
//!     into the scanner; the token tree is the only contract between the two stages.
//!
//! Mapping
//!
//!     | Token | HTML |
//!     |-------|------|
//!     | Paragraph | `<p>` |
//!     | Header1..Header4 | `<h1>`..`<h4>` |
//!     | Bold / Italic / Strikethrough | `<strong>` / `<em>` / `<del>` |
//!     | Link | `<a href="..">`, plus `target="_blank"` with `external_anchor` |
//!     | UnorderedList / ListItem | `<ul>` / `<li>` |
//!     | HorizontalRule | `<hr/>` |
//!     | Space, PlainText | a single `\n` |
//!
//! Splicing
//!
//!     A wrapped token's body is its `text` with every child's `raw` replaced by the child's
//!     rendered HTML. See [SpliceMode] for how the replacement site is found.

mod html;

pub use html::HtmlRenderer;

use serde::Deserialize;

use crate::quill::token::Token;

/// How rendered children are located inside their parent's text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpliceMode {
    /// Replace the first occurrence of each child's `raw` in the partially rendered text,
    /// children in order. A child's `raw` can match inside HTML produced for an earlier
    /// child (for example inside an `href`).
    #[default]
    FirstMatch,
    /// Search each child's `raw` only in the source text after the previous child.
    Ordered,
}

/// Options for HTML output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Open links in a new tab (`target="_blank"`)
    pub external_anchor: bool,
    pub splice: SpliceMode,
}

impl RenderConfig {
    pub fn with_external_anchor(mut self, external_anchor: bool) -> Self {
        self.external_anchor = external_anchor;
        self
    }

    pub fn with_splice(mut self, splice: SpliceMode) -> Self {
        self.splice = splice;
        self
    }
}

/// Render top-level tokens to HTML
pub fn render(tokens: &[Token], config: &RenderConfig) -> String {
    HtmlRenderer::new(*config).render(tokens)
}
