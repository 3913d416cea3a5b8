//! Token model shared by the scanner, the renderer and the inspection formats.
//!
//!     A document is scanned into a flat sequence of block tokens. Blocks that carry inline
//!     content (paragraphs, headers, list items, links) own a nested tree of inline tokens in
//!     `children`. There is a single token shape for both layers; the [TokenKind] says which
//!     one it is.
//!
//! Raw and Text
//!
//!     Every token keeps two views of its source:
//!
//!         - `raw`: the exact slice of the source it was scanned from, delimiters included
//!           (`**bold**`, `# Title`, `[label](href)`).
//!         - `text`: the logical content. Block markers and emphasis delimiters are stripped,
//!           paragraphs fold indented continuation lines into a single space.
//!
//!     The renderer depends on one invariant: every child's `raw` appears verbatim inside its
//!     parent's `text`, and children are ordered by where they occur. That is what lets it
//!     splice rendered children back into the parent text.
//!
//!     Tokens are value objects. They are built once by the scanner and never mutated.

pub mod kind;

pub use kind::TokenKind;

use serde::ser::SerializeMap;
use serde::Serialize;

/// Kind-specific attributes of a token.
///
/// Only links carry anything today.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Properties {
    #[default]
    None,
    Link {
        href: String,
    },
}

impl Serialize for Properties {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Properties::None => serializer.serialize_map(Some(0))?.end(),
            Properties::Link { href } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("href", href)?;
                map.end()
            }
        }
    }
}

/// A scanned token, possibly with nested inline children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    raw: String,
    text: String,
    children: Vec<Token>,
    properties: Properties,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        raw: impl Into<String>,
        text: impl Into<String>,
        children: Vec<Token>,
        properties: Properties,
    ) -> Self {
        Self {
            kind,
            raw: raw.into(),
            text: text.into(),
            children,
            properties,
        }
    }

    /// A token without children or properties
    pub fn leaf(kind: TokenKind, raw: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(kind, raw, text, Vec::new(), Properties::None)
    }

    /// A [TokenKind::Link] token
    pub fn link(
        raw: impl Into<String>,
        text: impl Into<String>,
        href: impl Into<String>,
        children: Vec<Token>,
    ) -> Self {
        Self::new(
            TokenKind::Link,
            raw,
            text,
            children,
            Properties::Link { href: href.into() },
        )
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Token] {
        &self.children
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// The link target, if this token is a link
    pub fn href(&self) -> Option<&str> {
        match &self.properties {
            Properties::Link { href } => Some(href),
            Properties::None => None,
        }
    }

    /// This token followed by all of its descendants, depth first, in document order
    pub fn walk(&self) -> Vec<&Token> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}
