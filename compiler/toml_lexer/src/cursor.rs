//! Read position over a [`SourceBuffer`].
//!
//! The cursor is the only mutable state in the lexer. It is [`Copy`], so a
//! snapshot taken before scanning a token is just a saved value, and the span
//! of the token is `snapshot..current`.
//!
//! # CRLF
//!
//! [`Cursor::forward`] treats a `\r` immediately followed by `\n` as one
//! logical step: standing on the `\r`, a single `forward()` lands after the
//! `\n`. Everything else advances by exactly one scalar value.

use std::fmt;

use crate::{SourceBuffer, Span};

/// Scalar-indexed read position. Created via [`SourceBuffer::cursor`].
///
/// # Invariant
///
/// `pos <= source.len()`, and `pos` never decreases.
#[derive(Clone, Copy)]
pub struct Cursor<'s> {
    source: &'s SourceBuffer,
    pos: u32,
}

impl<'s> Cursor<'s> {
    /// Create a cursor at position 0 over `source`.
    pub(crate) fn new(source: &'s SourceBuffer) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Scalar value `offset` positions ahead, or `None` past the end.
    #[inline]
    pub fn peek(&self, offset: u32) -> Option<char> {
        self.source.get(self.pos.saturating_add(offset))
    }

    /// Scalar value at the current position. Same as `peek(0)`.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// Advance one logical step.
    ///
    /// `\r\n` is consumed as a unit. At end of input this is a no-op.
    #[inline]
    pub fn forward(&mut self) {
        match (self.current(), self.peek(1)) {
            (None, _) => {}
            (Some('\r'), Some('\n')) => self.pos += 2,
            (Some(_), _) => self.pos += 1,
        }
    }

    /// Consume the current scalar value if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.forward();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current scalar value.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.current() {
            if !pred(ch) {
                break;
            }
            self.forward();
        }
    }

    /// Returns `true` once every scalar value has been consumed.
    #[inline]
    pub fn done(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current scalar index.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// The buffer being read.
    pub fn source(&self) -> &'s SourceBuffer {
        self.source
    }

    /// Zero-length span at the current position.
    pub fn span(&self) -> Span<'s> {
        Span::point(self.source, self.pos)
    }

    /// Span from an earlier snapshot `start` to the current position.
    pub fn span_from(&self, start: Cursor<'_>) -> Span<'s> {
        debug_assert!(start.pos <= self.pos, "snapshot is ahead of the cursor");
        Span::new(self.source, start.pos, self.pos)
    }

    /// Source text from an earlier snapshot `start` to the current position.
    pub fn text_from(&self, start: Cursor<'_>) -> &'s str {
        self.source.slice(start.pos, self.pos)
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("pos", &self.pos).finish()
    }
}

#[cfg(test)]
mod tests;
