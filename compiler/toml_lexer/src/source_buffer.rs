//! Immutable, scalar-indexed source text.
//!
//! The buffer decodes its input once into Unicode scalar values so that every
//! position in the lexer (cursor, spans, diagnostics) counts characters rather
//! than UTF-8 bytes. A supplementary-plane character such as `"\u{1F600}"`
//! occupies exactly one index.
//!
//! The original text is kept alongside the decoded sequence together with a
//! scalar-to-byte offset table, so span text can be handed out as borrowed
//! `&str` slices without re-encoding.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::Cursor;

/// Placeholder shown in diagnostics when a buffer has no display path.
pub const UNNAMED_FILE: &str = "<unnamed file>";

/// Decoded source text plus an optional display path.
///
/// Never mutated after construction. Any number of [`Tokenizer`]s may borrow
/// the same buffer, including from different threads.
///
/// [`Tokenizer`]: crate::Tokenizer
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    path: Option<PathBuf>,
    text: String,
    chars: Vec<char>,
    /// Byte offset of each scalar value in `text`, followed by one trailing
    /// entry equal to `text.len()`. Always `chars.len() + 1` entries.
    byte_offsets: Vec<usize>,
    /// Scalar index at which each line starts. `line_starts[0] == 0`.
    line_starts: Vec<u32>,
}

impl SourceBuffer {
    /// Decode `source` into a buffer without a display path.
    pub fn new(source: &str) -> Self {
        Self::build(source, None)
    }

    /// Decode `source` into a buffer that reports `path` in diagnostics.
    pub fn with_path(source: &str, path: impl Into<PathBuf>) -> Self {
        Self::build(source, Some(path.into()))
    }

    fn build(source: &str, path: Option<PathBuf>) -> Self {
        let mut chars = Vec::with_capacity(source.len());
        let mut byte_offsets = Vec::with_capacity(source.len() + 1);
        let mut line_starts = vec![0u32];

        for (offset, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(saturating_u32(chars.len() + 1));
            }
            byte_offsets.push(offset);
            chars.push(ch);
        }
        byte_offsets.push(source.len());

        Self {
            path,
            text: source.to_owned(),
            chars,
            byte_offsets,
            line_starts,
        }
    }

    /// Create a [`Cursor`] positioned at scalar index 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Number of scalar values in the buffer.
    ///
    /// Saturates at `u32::MAX` for inputs beyond 4 Gi characters.
    pub fn len(&self) -> u32 {
        saturating_u32(self.chars.len())
    }

    /// Returns `true` if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Scalar value at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: u32) -> Option<char> {
        self.chars.get(index as usize).copied()
    }

    /// The original text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The display path, if one was given.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The display path, or [`UNNAMED_FILE`].
    pub fn display_path(&self) -> Cow<'_, str> {
        match &self.path {
            Some(path) => path.to_string_lossy(),
            None => Cow::Borrowed(UNNAMED_FILE),
        }
    }

    /// Text of the scalar range `start..end`, clamped to the buffer.
    pub fn slice(&self, start: u32, end: u32) -> &str {
        let last = self.chars.len();
        let end = (end as usize).min(last);
        let start = (start as usize).min(end);
        &self.text[self.byte_offsets[start]..self.byte_offsets[end]]
    }

    /// 1-based `(line, column)` of a scalar position, both counted in scalar
    /// values. A CRLF pair ends a line once; the `\r` is the last column of
    /// the line it terminates.
    pub fn line_col(&self, pos: u32) -> (u32, u32) {
        let pos = pos.min(self.len());
        let line_idx = match self.line_starts.binary_search(&pos) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line_idx).copied().unwrap_or(0);
        (saturating_u32(line_idx + 1), pos - line_start + 1)
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
