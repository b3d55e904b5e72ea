//! Lexical error types.
//!
//! Every error carries the [`Span`] it was raised at. Rendering follows the
//! diagnostic format shared with the parser layer:
//!
//! ```text
//! <Kind> (<path> [<start>,<end>]:<context>)[: <detail>]
//! ```
//!
//! The tokenizer raises only the first seven kinds. `NewlineInTableKey`,
//! `MultilineStringKey` and `Wanted` belong to the same taxonomy but are
//! raised by the parser that consumes the token stream.

use std::fmt;

use crate::Span;

/// A lexical error at a source location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} ({span}){}", .kind.name(), .kind.detail_suffix())]
pub struct LexError<'s> {
    pub kind: LexErrorKind,
    pub span: Span<'s>,
}

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// Control character inside a string body.
    InvalidCharInString(char),
    /// Backslash followed by a character with no escape meaning.
    InvalidEscape(char),
    /// Non-hex character inside `\uXXXX` / `\UXXXXXXXX`.
    InvalidHexEscape(char),
    /// `\u` / `\U` escape naming a surrogate or a value past U+10FFFF.
    InvalidEscapeValue(u32),
    /// Line break inside a single-line string.
    NewlineInString,
    /// Character that cannot start any token.
    Unexpected(char),
    /// Input ended inside a string.
    UnterminatedString,
    /// Line break inside a table header key.
    NewlineInTableKey,
    /// Multiline string used as a key.
    MultilineStringKey,
    /// Parser expected one thing and found another.
    Wanted {
        expected: &'static str,
        found: &'static str,
    },
}

impl<'s> LexError<'s> {
    pub fn new(kind: LexErrorKind, span: Span<'s>) -> Self {
        LexError { kind, span }
    }
}

impl LexErrorKind {
    /// Kind name as it appears at the head of a rendered diagnostic.
    pub fn name(&self) -> &'static str {
        match self {
            LexErrorKind::InvalidCharInString(_) => "InvalidCharInString",
            LexErrorKind::InvalidEscape(_) => "InvalidEscape",
            LexErrorKind::InvalidHexEscape(_) => "InvalidHexEscape",
            LexErrorKind::InvalidEscapeValue(_) => "InvalidEscapeValue",
            LexErrorKind::NewlineInString => "NewlineInString",
            LexErrorKind::Unexpected(_) => "Unexpected",
            LexErrorKind::UnterminatedString => "UnterminatedString",
            LexErrorKind::NewlineInTableKey => "NewlineInTableKey",
            LexErrorKind::MultilineStringKey => "MultilineStringKey",
            LexErrorKind::Wanted { .. } => "Wanted",
        }
    }

    /// The `: <detail>` tail of a rendered diagnostic, empty for kinds that
    /// carry no payload.
    pub fn detail_suffix(&self) -> DetailSuffix<'_> {
        DetailSuffix(self)
    }
}

/// Display adapter returned by [`LexErrorKind::detail_suffix`].
pub struct DetailSuffix<'k>(&'k LexErrorKind);

impl fmt::Display for DetailSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            LexErrorKind::InvalidCharInString(ch)
            | LexErrorKind::InvalidEscape(ch)
            | LexErrorKind::InvalidHexEscape(ch)
            | LexErrorKind::Unexpected(ch) => write!(f, ": Unexpected character: {ch:?}"),
            LexErrorKind::InvalidEscapeValue(value) => {
                write!(f, ": invalid escape value: {value:#X}")
            }
            LexErrorKind::Wanted { expected, found } => {
                write!(f, ": expected {expected}, found {found}")
            }
            LexErrorKind::NewlineInString
            | LexErrorKind::UnterminatedString
            | LexErrorKind::NewlineInTableKey
            | LexErrorKind::MultilineStringKey => Ok(()),
        }
    }
}
