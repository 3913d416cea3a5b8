//! Inline scanning
//!
//!     Inline constructs are tried at every position of a header, paragraph, list item or
//!     link label:
//!
//!         - `[`: link, `[label](href)`. The label is scanned for inlines itself.
//!         - `*`, `_`, `~`: emphasis. The content is not scanned any deeper.
//!
//!     An attempt that does not close returns `None` and the cursor is put back where the
//!     attempt began.
//!
//! Delimiter Runs
//!
//!     Emphasis measures the opening and closing runs of its delimiter. When they differ, the
//!     surplus on the longer side is left outside the token as literal text, so `**bold*`
//!     becomes a `*` followed by an italic `*bold*`. Bold and strikethrough are then narrowed
//!     to at most two delimiters per side. When the closing run was longer than two, two of
//!     its chars are handed back to the enclosing block to be read again.

use super::Scanner;
use crate::quill::token::{Token, TokenKind};

impl Scanner<'_> {
    /// Try to scan one inline construct at the read position
    pub(super) fn scan_children(&mut self) -> Option<Token> {
        let c = self.cursor.peek()?;
        let offset = self.cursor.current();
        let mark = self.cursor.mark();
        let child = match c {
            '[' if self.failed_anchors.contains(&offset) => return None,
            '[' => {
                let anchor = self.scan_anchor();
                if anchor.is_none() {
                    self.failed_anchors.insert(offset);
                }
                anchor
            }
            '*' | '_' | '~' => self.scan_modifier(c),
            _ => return None,
        };
        if child.is_none() {
            tracing::trace!(delimiter = %c, offset, "inline attempt failed");
            self.cursor.rollback(mark);
        }
        child
    }

    fn scan_modifier(&mut self, delimiter: char) -> Option<Token> {
        let start = self.cursor.current();
        let pre_count = self.cursor.consume_run(delimiter);
        while !self.cursor.is_at_end()
            && !self.cursor.matches(delimiter)
            && !self.cursor.matches('\n')
        {
            self.cursor.advance();
        }
        let post_count = self.cursor.consume_run(delimiter);

        if pre_count == 0 || post_count == 0 {
            return None;
        }

        // Surplus delimiters on the longer side stay outside the token.
        let before = pre_count.saturating_sub(post_count);
        let after = post_count.saturating_sub(pre_count);
        let raw = self
            .cursor
            .slice(start + before, self.cursor.current() - after);

        // Both sides now hold the same number of delimiters.
        let wrap = pre_count - before;
        let text = &raw[wrap..raw.len() - wrap];
        let kind = TokenKind::emphasis(delimiter, pre_count, post_count);

        let mut raw = raw;
        if kind != TokenKind::Italic && (pre_count > 2 || post_count > 2) {
            let trim = wrap - wrap.min(2);
            raw = &raw[trim..raw.len() - trim];
            // Relative to the end of the closing run, never an absolute offset.
            if post_count > 2 {
                self.cursor.step_back(2);
            }
        }

        Some(Token::leaf(kind, raw, text))
    }

    fn scan_anchor(&mut self) -> Option<Token> {
        let open = self.cursor.current();
        self.cursor.advance();

        let text_start = self.cursor.current();
        let children = self.scan_content(|cursor| cursor.matches(']') || cursor.matches('\n'));
        let text_end = self.cursor.current();
        if !self.cursor.consume(']') || !self.cursor.consume('(') {
            return None;
        }

        let href_start = self.cursor.current();
        while !self.cursor.is_at_end() && !self.cursor.matches(')') && !self.cursor.matches('\n')
        {
            self.cursor.advance();
        }
        let href_end = self.cursor.current();
        if !self.cursor.consume(')') {
            return None;
        }

        Some(Token::link(
            self.cursor.slice(open, self.cursor.current()),
            self.cursor.slice(text_start, text_end),
            self.cursor.slice(href_start, href_end),
            children,
        ))
    }
}
