//! Block scanning
//!
//!     Block tokens start wherever the top-level loop leaves the cursor. They are: whitespace
//!     runs, headers, paragraphs, horizontal rules and unordered lists.
//!
//!     Blocks never fail. A header without a space after its `#` run and a dash run that is
//!     not a rule both fall back to a paragraph that keeps the consumed markers in its `raw`
//!     and `text`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Scanner;
use crate::quill::token::{Properties, Token, TokenKind};

/// Leading `#` run and the whitespace after it
static HEADER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+\s+").unwrap());

/// A line break followed by indentation continues the paragraph on the same line
static SOFT_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s{2,}").unwrap());

impl Scanner<'_> {
    pub(super) fn scan_token(&mut self) -> Token {
        self.cursor.jump();
        match self.cursor.peek() {
            Some('\n') | Some(' ') => self.scan_space(),
            Some('#') => self.scan_header(),
            Some('-') => match self.cursor.peek_next() {
                Some(' ') => self.scan_unordered_list(),
                Some('-') => self.scan_rule(),
                _ => self.scan_paragraph(),
            },
            _ => self.scan_paragraph(),
        }
    }

    fn scan_space(&mut self) -> Token {
        while self.cursor.matches('\n') || self.cursor.matches(' ') {
            self.cursor.advance();
        }
        let raw = self.cursor.extract();
        Token::leaf(TokenKind::Space, raw, raw)
    }

    fn scan_header(&mut self) -> Token {
        let depth = self.cursor.consume_run('#');
        if !self.cursor.consume(' ') {
            tracing::trace!(offset = self.cursor.start(), "header without separator");
            return self.scan_paragraph();
        }

        let children = self.scan_content(|cursor| cursor.matches('\n'));
        let raw = self.cursor.extract();
        let text = HEADER_PREFIX.replace(raw, "");
        tracing::trace!(depth, offset = self.cursor.start(), "header");
        Token::new(
            TokenKind::header(depth),
            raw,
            text,
            children,
            Properties::None,
        )
    }

    fn scan_paragraph(&mut self) -> Token {
        let children = self.scan_content(|cursor| {
            cursor.matches('\n') && cursor.peek_next() == Some('\n')
        });
        let raw = self.cursor.extract();
        let text = SOFT_BREAK.replace_all(raw, " ");
        Token::new(TokenKind::Paragraph, raw, text, children, Properties::None)
    }

    /// Three or more dashes directly followed by a line break.
    ///
    /// Anything else becomes a paragraph. The char right after the dash run is taken as
    /// literal text without being looked at, so it can neither open an inline nor end the
    /// paragraph.
    fn scan_rule(&mut self) -> Token {
        let count = self.cursor.consume_run('-');
        if count < 3 || !self.cursor.matches('\n') {
            tracing::trace!(count, offset = self.cursor.start(), "not a rule");
            self.cursor.advance();
            return self.scan_paragraph();
        }
        let raw = self.cursor.extract();
        Token::leaf(TokenKind::HorizontalRule, raw, raw)
    }

    fn scan_unordered_list(&mut self) -> Token {
        let start = self.cursor.start();
        let mut items = Vec::new();
        while let Some(item) = self.scan_list_item() {
            items.push(item);
        }
        let raw = self.cursor.slice(start, self.cursor.current());
        tracing::trace!(items = items.len(), offset = start, "unordered list");
        Token::new(TokenKind::UnorderedList, raw, raw, items, Properties::None)
    }

    /// One `- ` line. Consumes the trailing line break and starts the next item after it.
    fn scan_list_item(&mut self) -> Option<Token> {
        if !(self.cursor.matches('-') && self.cursor.peek_next() == Some(' ')) {
            return None;
        }

        let children = self.scan_content(|cursor| cursor.matches('\n'));
        let raw = self.cursor.extract();
        let text = &raw[2..];
        self.cursor.consume('\n');
        self.cursor.jump();
        Some(Token::new(
            TokenKind::ListItem,
            raw,
            text,
            children,
            Properties::None,
        ))
    }
}
