//! Token types produced by the [`Tokenizer`](crate::Tokenizer).

use crate::Span;

/// A classified lexical unit with its source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind<'s>,
    pub span: Span<'s>,
}

/// What a [`Token`] is, with any payload it carries.
///
/// Raw-text payloads borrow from the [`SourceBuffer`](crate::SourceBuffer);
/// only the decoded value of a string literal is owned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind<'s> {
    /// End of input. Repeats once reached.
    EndOfFile,
    /// Run of spaces and tabs.
    Whitespace(&'s str),
    /// `\n` or `\r\n`.
    Newline,
    /// From `#` up to, not including, the line end.
    Comment(&'s str),
    /// `=`
    Equals,
    /// `.`
    Period,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `+`
    Plus,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// Run of bare-key characters (`A-Z a-z 0-9 _ -`).
    KeyLike(&'s str),
    /// Quoted string, literal (`'`) or basic (`"`).
    StringLit {
        /// Value after escape decoding and newline normalization.
        value: String,
        /// Source text including delimiters, escapes as written.
        raw: &'s str,
        /// Triple-quoted.
        multiline: bool,
    },
}

impl<'s> Token<'s> {
    pub fn new(kind: TokenKind<'s>, span: Span<'s>) -> Self {
        Token { kind, span }
    }

    /// Exact source text the token was scanned from.
    pub fn raw(&self) -> &'s str {
        self.span.text()
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfFile)
    }
}

impl TokenKind<'_> {
    /// Short human-readable description, for "expected X, found Y" messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "eof",
            TokenKind::Whitespace(_) => "whitespace",
            TokenKind::Newline => "a newline",
            TokenKind::Comment(_) => "a comment",
            TokenKind::Equals => "an equals",
            TokenKind::Period => "a period",
            TokenKind::Comma => "a comma",
            TokenKind::Colon => "a colon",
            TokenKind::Plus => "a plus",
            TokenKind::LeftBrace => "a left brace",
            TokenKind::RightBrace => "a right brace",
            TokenKind::LeftBracket => "a left bracket",
            TokenKind::RightBracket => "a right bracket",
            TokenKind::KeyLike(_) => "an identifier",
            TokenKind::StringLit { multiline, .. } => {
                if *multiline {
                    "a multiline string"
                } else {
                    "a string"
                }
            }
        }
    }
}
