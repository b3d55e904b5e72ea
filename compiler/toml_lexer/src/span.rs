//! Source location spans.
//!
//! A [`Span`] is a half-open range of scalar-value indices into one specific
//! [`SourceBuffer`]. It is a plain `Copy` value: a buffer reference plus two
//! `u32` positions.

use std::fmt;
use std::ptr;

use crate::SourceBuffer;

/// Scalar values of context shown on each side of a rendered span.
const CONTEXT_WIDTH: u32 = 3;

/// Marker placed where rendered context was cut short.
const ELLIPSIS: &str = "...";

/// Error returned when spans cannot be combined.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// The two spans point into different source buffers.
    #[error("cannot combine spans from different sources ({left} and {right})")]
    DifferentSources { left: String, right: String },
}

/// Half-open range `start..end` of scalar values in a [`SourceBuffer`].
///
/// Two spans are equal when they cover the same range of the *same* buffer
/// (buffer identity, not buffer contents).
#[derive(Clone, Copy)]
pub struct Span<'s> {
    source: &'s SourceBuffer,
    start: u32,
    end: u32,
}

impl<'s> Span<'s> {
    /// Create a span over `source`.
    ///
    /// `start` and `end` are ordered if given reversed.
    pub fn new(source: &'s SourceBuffer, start: u32, end: u32) -> Self {
        Span {
            source,
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Zero-length span at `offset`.
    pub fn point(source: &'s SourceBuffer, offset: u32) -> Self {
        Span::new(source, offset, offset)
    }

    /// Inclusive start position.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end position.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length in scalar values.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` for a zero-length span.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The buffer this span points into.
    pub fn source(&self) -> &'s SourceBuffer {
        self.source
    }

    /// Returns `true` if `other` points into the same buffer.
    pub fn same_source(&self, other: &Span<'_>) -> bool {
        ptr::eq(self.source, other.source)
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// Fails if the spans belong to different buffers.
    pub fn combine(self, other: Span<'_>) -> Result<Span<'s>, SpanError> {
        if !self.same_source(&other) {
            return Err(SpanError::DifferentSources {
                left: self.source.display_path().into_owned(),
                right: other.source.display_path().into_owned(),
            });
        }
        Ok(Span {
            source: self.source,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }

    /// Exact source text covered by the span.
    pub fn text(&self) -> &'s str {
        self.source.slice(self.start, self.end)
    }

    /// Span text with up to three scalar values of context on each side.
    ///
    /// Context cut short by the edge of the buffer is shown as-is; context
    /// cut short by [`CONTEXT_WIDTH`] is marked with `...`.
    pub fn context(&self) -> String {
        let before_start = self.start.saturating_sub(CONTEXT_WIDTH);
        let after_end = self.end.saturating_add(CONTEXT_WIDTH).min(self.source.len());

        let mut out = String::new();
        if before_start > 0 {
            out.push_str(ELLIPSIS);
        }
        out.push_str(self.source.slice(before_start, after_end));
        if after_end < self.source.len() {
            out.push_str(ELLIPSIS);
        }
        out
    }
}

impl PartialEq for Span<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_source(other) && self.start == other.start && self.end == other.end
    }
}

impl Eq for Span<'_> {}

impl fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Diagnostic rendering: `<path> [<start>,<end>]:<context>`.
impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{},{}]:{}",
            self.source.display_path(),
            self.start,
            self.end,
            self.context()
        )
    }
}
