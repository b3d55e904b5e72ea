//! The `lex` command: print the token stream of one input.

use toml_lexer::{tokenize, SourceBuffer};

use super::{read_source, render_error};

/// One line per token, `<kind> @ <start>..<end>`, ending with the
/// end-of-file token.
pub fn render_tokens(source: &SourceBuffer) -> Result<Vec<String>, String> {
    let tokens = tokenize(source).map_err(|err| render_error(&err))?;
    Ok(tokens
        .iter()
        .map(|tok| format!("{:?} @ {}..{}", tok.kind, tok.span.start(), tok.span.end()))
        .collect())
}

/// Entry point for `tomlc lex [path]`.
pub fn run_lex(path: &str) {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    match render_tokens(&source) {
        Ok(lines) => {
            println!("Tokens for '{}' ({} tokens):", source.display_path(), lines.len());
            for line in lines {
                println!("  {line}");
            }
        }
        Err(report) => {
            eprintln!("{report}");
            std::process::exit(1);
        }
    }
}
