//! XML-like token tree serialization
//!
//! ## Format
//!
//! - Token kind → tag name
//! - Token text → text content, with line breaks shown as `\n`
//! - Children → nested tags (no wrapper)
//! - Link href → `href` attribute
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <header1>Title</header1>
//!   <space>\n\n</space>
//!   <paragraph>Hello *world*
//!     <italic>world</italic>
//!   </paragraph>
//! </document>
//! ```

use super::registry::{FormatError, Formatter};
use crate::quill::token::Token;

/// Tag serializer that converts a token tree to the XML-like format
struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn serialize_token(&mut self, token: &Token) {
        let tag = token.kind().to_string();
        let open = match token.href() {
            Some(href) => format!("<{} href=\"{}\">", tag, escape_xml(href)),
            None => format!("<{}>", tag),
        };

        self.push_indent(&open);
        self.output.push_str(&escape_xml(token.text()));

        if token.children().is_empty() {
            self.output.push_str(&format!("</{}>", tag));
            self.output.push('\n');
        } else {
            self.output.push('\n');
            self.indent_level += 1;
            for child in token.children() {
                self.serialize_token(child);
            }
            self.indent_level -= 1;
            self.push_indent(&format!("</{}>", tag));
            self.output.push('\n');
        }
    }
}

/// Serialize a token sequence to tag format
pub fn serialize_tokens(tokens: &[Token]) -> String {
    let mut serializer = TagSerializer::new();
    serializer.indent_level = 1;
    for token in tokens {
        serializer.serialize_token(token);
    }

    let mut result = String::from("<document>\n");
    result.push_str(&serializer.output);
    result.push_str("</document>");
    result
}

/// Escape XML special characters and make line breaks visible
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
        .replace('\n', "\\n")
}

/// Format implementation for XML-like tag format
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &'static str {
        "tag"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(serialize_tokens(tokens))
    }

    fn description(&self) -> &'static str {
        "XML-like token tree"
    }
}
