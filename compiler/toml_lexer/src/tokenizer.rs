//! Hand-written TOML tokenizer.
//!
//! The tokenizer holds one [`Cursor`] and produces one [`Token`] per call to
//! [`Tokenizer::next_token`]. Every call either advances the cursor or
//! returns a terminal result (end of input, or an error), so tokenizing is
//! linear in the input length and cannot loop on malformed input.
//!
//! # Design
//!
//! Dispatch is on the current scalar value. Single-character punctuation is
//! handled inline; runs (whitespace, comments, bare keys) use
//! [`Cursor::eat_while`]; strings go through the shared scanner in
//! [`string`], parameterized by delimiter and per-character reader.

mod string;

use crate::{Cursor, LexError, LexErrorKind, SourceBuffer, Token, TokenKind};

use string::{read_basic, read_literal, ReadChar, StringScan};

/// Byte-order mark, skipped once at the start of input.
const BOM: char = '\u{FEFF}';

/// Pull-based tokenizer over a [`SourceBuffer`].
///
/// Once [`TokenKind::EndOfFile`] has been produced, further calls keep
/// producing it with the same span. A returned error leaves the cursor where
/// scanning stopped; resynchronizing is up to the caller.
pub struct Tokenizer<'s> {
    cursor: Cursor<'s>,
    /// Set once the iterator adapter has yielded an error.
    failed: bool,
}

impl<'s> Tokenizer<'s> {
    /// Create a tokenizer at the start of `source`, skipping a leading BOM.
    pub fn new(source: &'s SourceBuffer) -> Self {
        let mut cursor = source.cursor();
        cursor.eat(BOM);
        Tokenizer {
            cursor,
            failed: false,
        }
    }

    /// Current scalar position.
    pub fn position(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Result<Token<'s>, LexError<'s>> {
        let start = self.cursor;
        let Some(ch) = self.cursor.current() else {
            return Ok(Token::new(TokenKind::EndOfFile, self.cursor.span()));
        };

        let kind = match ch {
            // `forward()` steps over `\r\n` as a unit.
            '\n' => self.single(TokenKind::Newline),
            '\r' if self.cursor.peek(1) == Some('\n') => self.single(TokenKind::Newline),
            ' ' | '\t' => {
                self.cursor.eat_while(is_whitespace);
                TokenKind::Whitespace(self.cursor.text_from(start))
            }
            '#' => {
                self.cursor.forward();
                self.cursor.eat_while(|c| !is_control(c));
                TokenKind::Comment(self.cursor.text_from(start))
            }
            '=' => self.single(TokenKind::Equals),
            '.' => self.single(TokenKind::Period),
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colon),
            '+' => self.single(TokenKind::Plus),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            '[' => self.single(TokenKind::LeftBracket),
            ']' => self.single(TokenKind::RightBracket),
            '\'' => return self.string(start, '\'', read_literal),
            '"' => return self.string(start, '"', read_basic),
            c if is_keylike(c) => {
                self.cursor.eat_while(is_keylike);
                TokenKind::KeyLike(self.cursor.text_from(start))
            }
            c => {
                self.cursor.forward();
                return Err(lex_error(start, self.cursor, LexErrorKind::Unexpected(c)));
            }
        };

        Ok(Token::new(kind, self.cursor.span_from(start)))
    }

    fn single(&mut self, kind: TokenKind<'s>) -> TokenKind<'s> {
        self.cursor.forward();
        kind
    }

    fn string(
        &mut self,
        start: Cursor<'s>,
        delim: char,
        read: ReadChar<'s>,
    ) -> Result<Token<'s>, LexError<'s>> {
        let mut scan = StringScan::new(start);
        let result = scan.scan(delim, read);
        self.cursor = scan.cursor;
        result
    }
}

/// Yields tokens up to, not including, [`TokenKind::EndOfFile`]. Stops after
/// the first error.
impl<'s> Iterator for Tokenizer<'s> {
    type Item = Result<Token<'s>, LexError<'s>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(tok) if tok.is_eof() => None,
            Ok(tok) => Some(Ok(tok)),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Tokenize a whole buffer.
///
/// The returned tokens end with [`TokenKind::EndOfFile`]. Stops at the first
/// lexical error.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &SourceBuffer) -> Result<Vec<Token<'_>>, LexError<'_>> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = tokenizer.next_token()?;
        let eof = tok.is_eof();
        tokens.push(tok);
        if eof {
            break;
        }
    }
    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Build an error spanning `from..to`.
fn lex_error<'s>(from: Cursor<'s>, to: Cursor<'s>, kind: LexErrorKind) -> LexError<'s> {
    let span = to.span_from(from);
    tracing::debug!(kind = kind.name(), start = span.start(), end = span.end(), "lexical error");
    LexError::new(kind, span)
}

#[inline]
fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Bare-key character: `A-Z a-z 0-9 _ -`.
#[inline]
fn is_keylike(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Control characters not allowed in comments or string bodies: everything
/// below U+0020 except tab, plus DEL.
#[inline]
fn is_control(c: char) -> bool {
    (c < ' ' && c != '\t') || c == '\u{7F}'
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
