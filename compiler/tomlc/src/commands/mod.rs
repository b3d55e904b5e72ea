//! Command handlers for the `tomlc` CLI.
//!
//! Each submodule implements one command. Input loading and error rendering
//! are shared and live here in the module root.

use std::io::Read;

use toml_lexer::{LexError, SourceBuffer};

mod check;
mod lex;

pub use check::{check_paths, check_source, run_check, CheckSummary};
pub use lex::{render_tokens, run_lex};

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Display name given to input read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// Load `path` (or stdin for [`STDIN_PATH`]) into a named buffer.
///
/// The error is a user-facing message, ready for stderr.
pub fn read_source(path: &str) -> Result<SourceBuffer, String> {
    if path == STDIN_PATH {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(SourceBuffer::with_path(&content, STDIN_NAME)),
            Err(e) => Err(io_error_message(STDIN_NAME, &e)),
        };
    }

    match std::fs::read_to_string(path) {
        Ok(content) => Ok(SourceBuffer::with_path(&content, path)),
        Err(e) => Err(io_error_message(path, &e)),
    }
}

fn io_error_message(path: &str, e: &std::io::Error) -> String {
    match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    }
}

/// Render a lexical error followed by a `path:line:col` pointer.
pub fn render_error(err: &LexError<'_>) -> String {
    let source = err.span.source();
    let (line, col) = source.line_col(err.span.start());
    format!("{err}\n  --> {}:{line}:{col}", source.display_path())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
