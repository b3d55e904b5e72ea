//! Lexical front end for TOML.
//!
//! Turns source text into a forward-only stream of [`Token`]s, each carrying
//! a [`Span`] back into its [`SourceBuffer`], or stops at the first
//! [`LexError`].
//!
//! # Layers
//!
//! - [`SourceBuffer`]: immutable, scalar-indexed copy of the input text.
//! - [`Cursor`]: read position over a buffer. CRLF advances as one step.
//! - [`Tokenizer`]: dispatch loop plus the string sub-grammar.
//!
//! Indices are Unicode scalar values, never bytes: `"é"` is one position.
//!
//! ```
//! use toml_lexer::{SourceBuffer, TokenKind, Tokenizer};
//!
//! let source = SourceBuffer::new("key = 'value'");
//! let mut tokenizer = Tokenizer::new(&source);
//! let first = tokenizer.next_token().map(|tok| tok.kind);
//! assert_eq!(first, Ok(TokenKind::KeyLike("key")));
//! ```

mod cursor;
mod lex_error;
mod source_buffer;
mod span;
mod token;
mod tokenizer;

pub use cursor::Cursor;
pub use lex_error::{DetailSuffix, LexError, LexErrorKind};
pub use source_buffer::{SourceBuffer, UNNAMED_FILE};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
