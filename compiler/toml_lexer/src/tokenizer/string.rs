//! String literal sub-grammar.
//!
//! Literal (`'`) and basic (`"`) strings share one scanner that handles
//! delimiters, the multiline form, and line breaks. The part that differs,
//! decoding a single body character, is a [`ReadChar`] passed in by the
//! caller: [`read_literal`] copies characters through, [`read_basic`]
//! resolves backslash escapes.

use crate::{Cursor, LexError, LexErrorKind, Token, TokenKind};

use super::{is_control, lex_error};

/// Decodes one body character (and anything it introduces, such as the rest
/// of an escape sequence) into the scan's value.
pub(super) type ReadChar<'s> = fn(&mut StringScan<'s>, char) -> Result<(), LexError<'s>>;

/// State of one string literal being scanned.
pub(super) struct StringScan<'s> {
    pub(super) cursor: Cursor<'s>,
    /// Snapshot at the opening delimiter.
    start: Cursor<'s>,
    multiline: bool,
    value: String,
}

impl<'s> StringScan<'s> {
    /// Start a scan with the cursor on the opening delimiter.
    pub(super) fn new(start: Cursor<'s>) -> Self {
        StringScan {
            cursor: start,
            start,
            multiline: false,
            value: String::new(),
        }
    }

    pub(super) fn scan(
        &mut self,
        delim: char,
        read: ReadChar<'s>,
    ) -> Result<Token<'s>, LexError<'s>> {
        self.cursor.forward();
        if self.cursor.current() == Some(delim) {
            if self.cursor.peek(1) == Some(delim) {
                self.cursor.forward();
                self.cursor.forward();
                self.multiline = true;
            } else {
                self.cursor.forward();
                return Ok(self.finish());
            }
        }

        // A newline right after the opening delimiter is not part of the value.
        if self.multiline && self.at_newline() {
            self.cursor.forward();
        }

        loop {
            let Some(ch) = self.cursor.current() else {
                return Err(self.error_from(self.start, LexErrorKind::UnterminatedString));
            };
            match ch {
                '\r' | '\n' => self.newline(ch)?,
                c if c == delim => {
                    if self.close(delim) {
                        return Ok(self.finish());
                    }
                }
                c => read(self, c)?,
            }
        }
    }

    /// `\n`, or `\r` immediately followed by `\n`.
    fn at_newline(&self) -> bool {
        match self.cursor.current() {
            Some('\n') => true,
            Some('\r') => self.cursor.peek(1) == Some('\n'),
            _ => false,
        }
    }

    fn newline(&mut self, ch: char) -> Result<(), LexError<'s>> {
        if !self.multiline {
            return Err(self.error_from(self.start, LexErrorKind::NewlineInString));
        }
        if ch == '\r' && !self.at_newline() {
            let at = self.cursor;
            self.cursor.forward();
            return Err(self.error_from(at, LexErrorKind::InvalidCharInString('\r')));
        }
        self.cursor.forward();
        self.value.push('\n');
        Ok(())
    }

    /// Consume a delimiter. Returns `true` if it closed the string.
    ///
    /// Multiline strings close on three delimiters in a row; one or two
    /// followed by anything else are content. Up to two delimiters right
    /// after a closing run also belong to the value, so `'''a''''` is `a'`.
    fn close(&mut self, delim: char) -> bool {
        self.cursor.forward();
        if !self.multiline {
            return true;
        }
        if self.cursor.eat(delim) {
            if self.cursor.eat(delim) {
                for _ in 0..2 {
                    if !self.cursor.eat(delim) {
                        break;
                    }
                    self.value.push(delim);
                }
                return true;
            }
            self.value.push(delim);
        }
        self.value.push(delim);
        false
    }

    fn finish(&mut self) -> Token<'s> {
        let span = self.cursor.span_from(self.start);
        Token::new(
            TokenKind::StringLit {
                value: std::mem::take(&mut self.value),
                raw: span.text(),
                multiline: self.multiline,
            },
            span,
        )
    }

    /// Copy a non-control character into the value.
    fn push_plain(&mut self, ch: char) -> Result<(), LexError<'s>> {
        let at = self.cursor;
        self.cursor.forward();
        if is_control(ch) {
            return Err(self.error_from(at, LexErrorKind::InvalidCharInString(ch)));
        }
        self.value.push(ch);
        Ok(())
    }

    /// Read exactly `digits` hex digits after `\u` / `\U` and push the scalar
    /// value they name.
    fn hex_escape(&mut self, escape_start: Cursor<'s>, digits: u32) -> Result<(), LexError<'s>> {
        let mut code: u32 = 0;
        for _ in 0..digits {
            let at = self.cursor;
            let Some(c) = self.cursor.current() else {
                return Err(self.error_from(self.start, LexErrorKind::UnterminatedString));
            };
            self.cursor.forward();
            let Some(digit) = c.to_digit(16) else {
                return Err(self.error_from(at, LexErrorKind::InvalidHexEscape(c)));
            };
            code = (code << 4) | digit;
        }
        match char::from_u32(code) {
            Some(decoded) => {
                self.value.push(decoded);
                Ok(())
            }
            None => Err(self.error_from(escape_start, LexErrorKind::InvalidEscapeValue(code))),
        }
    }

    /// Skip a backslash-newline and all whitespace and newlines after it.
    fn line_continuation(
        &mut self,
        escape_start: Cursor<'s>,
        newline: char,
    ) -> Result<(), LexError<'s>> {
        self.cursor.forward();
        loop {
            match self.cursor.current() {
                Some(' ' | '\t') => self.cursor.forward(),
                Some('\n' | '\r') if self.at_newline() => self.cursor.forward(),
                Some(_) => return Ok(()),
                None => {
                    return Err(self.error_from(escape_start, LexErrorKind::InvalidEscape(newline)));
                }
            }
        }
    }

    fn error_from(&self, from: Cursor<'s>, kind: LexErrorKind) -> LexError<'s> {
        lex_error(from, self.cursor, kind)
    }
}

/// Literal strings: no escapes, control characters rejected.
pub(super) fn read_literal<'s>(scan: &mut StringScan<'s>, ch: char) -> Result<(), LexError<'s>> {
    scan.push_plain(ch)
}

/// Basic strings: backslash escapes resolved, control characters rejected.
pub(super) fn read_basic<'s>(scan: &mut StringScan<'s>, ch: char) -> Result<(), LexError<'s>> {
    if ch != '\\' {
        return scan.push_plain(ch);
    }

    let escape_start = scan.cursor;
    scan.cursor.forward();
    let Some(esc) = scan.cursor.current() else {
        return Err(scan.error_from(scan.start, LexErrorKind::UnterminatedString));
    };

    let decoded = match esc {
        '"' => '"',
        '\\' => '\\',
        'b' => '\u{8}',
        'f' => '\u{C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'u' | 'U' => {
            scan.cursor.forward();
            let digits = if esc == 'u' { 4 } else { 8 };
            return scan.hex_escape(escape_start, digits);
        }
        '\n' | '\r' if scan.multiline && scan.at_newline() => {
            return scan.line_continuation(escape_start, esc);
        }
        other => {
            scan.cursor.forward();
            return Err(scan.error_from(escape_start, LexErrorKind::InvalidEscape(other)));
        }
    };

    scan.cursor.forward();
    scan.value.push(decoded);
    Ok(())
}
