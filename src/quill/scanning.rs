//! Scanner
//!
//!     Recursive-descent scanner that turns source text into an ordered sequence of block
//!     tokens, each with a tree of inline children.
//!
//! Structure
//!
//!     The scanner is a single left-to-right pass driven by a [Cursor]. Each iteration of the
//!     top-level loop begins a new block token at the read position and dispatches on the
//!     lookahead:
//!
//!         - `\n` or ` `: whitespace run, see [blocks](blocks).
//!         - `#`: header.
//!         - `- `: unordered list.
//!         - `--`: horizontal rule, falling back to a paragraph.
//!         - anything else: paragraph.
//!
//!     Headers, paragraphs, list items and link labels try inline scanning at every position
//!     they read (`[`, `*`, `_`, `~`), see [inlines](inlines).
//!
//! Failure
//!
//!     Nothing here returns an error. Inline constructs are tentative: the cursor is marked
//!     before the attempt and rolled back if the construct does not close, so the triggering
//!     character is read again as plain text. A `[` that failed once is not retried, which
//!     keeps nested unclosed labels from backtracking without bound. Every block consumes at least one char, which
//!     keeps the loop finite, and the concatenated `raw` of the top-level tokens is always the
//!     whole input.

mod blocks;
pub mod cursor;
mod inlines;

pub use cursor::{Cursor, Mark};

use std::collections::HashSet;

use crate::quill::token::Token;

/// Scan `source` into its top-level block tokens
pub fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source).scan()
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    /// Offsets of `[` that did not close into a link. The outcome only depends on the
    /// text from the offset on, so a failed start is never tried twice.
    failed_anchors: HashSet<usize>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            failed_anchors: HashSet::new(),
        }
    }

    /// Run the top-level loop until the input is exhausted
    pub fn scan(mut self) -> Vec<Token> {
        while !self.cursor.is_at_end() {
            let token = self.scan_token();
            self.tokens.push(token);
        }
        tracing::debug!(tokens = self.tokens.len(), "scan complete");
        self.tokens
    }

    /// Scan inline content until `stop` matches or the input ends, collecting children.
    ///
    /// Positions where no inline construct starts are consumed as plain content.
    fn scan_content(&mut self, stop: impl Fn(&Cursor<'a>) -> bool) -> Vec<Token> {
        let mut children = Vec::new();
        while !self.cursor.is_at_end() && !stop(&self.cursor) {
            match self.scan_children() {
                Some(child) => children.push(child),
                None => {
                    self.cursor.advance();
                }
            }
        }
        children
    }
}
