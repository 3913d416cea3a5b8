//! Read cursor over the source text
//!
//!     The cursor tracks two byte offsets into an immutable buffer: `start`, where the token
//!     being scanned began, and `current`, the read position. `current` only moves forward,
//!     except through [Cursor::rollback] to a previously taken [Mark] or a bounded
//!     [Cursor::step_back] over ASCII delimiters.
//!
//!     Offsets always sit on char boundaries: [Cursor::advance] moves by whole chars.

/// A saved read position to return to when a tentative scan fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    start: usize,
    current: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    pub fn matches(&self, c: char) -> bool {
        self.peek() == Some(c)
    }

    /// Move past the current char. Does nothing at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// Advance only if the current char is `c`
    pub fn consume(&mut self, c: char) -> bool {
        if !self.matches(c) {
            return false;
        }
        self.advance();
        true
    }

    /// Consume a run of `c`, returning its length
    pub fn consume_run(&mut self, c: char) -> usize {
        let mut count = 0;
        while self.consume(c) {
            count += 1;
        }
        count
    }

    /// The source between `start` and `current`
    pub fn extract(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.source[from..to]
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn mark(&self) -> Mark {
        Mark(self.current)
    }

    pub fn rollback(&mut self, mark: Mark) {
        self.current = mark.0;
    }

    /// Return `n` bytes to the stream. Only used over ASCII delimiter runs.
    pub fn step_back(&mut self, n: usize) {
        self.current = self.current.saturating_sub(n).max(self.start);
    }

    /// Begin a new token at the read position
    pub fn jump(&mut self) {
        self.start = self.current;
    }
}
