//! The `check` command: tokenize files and report the first lexical error
//! in each.
//!
//! Multiple paths are checked in parallel.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use toml_lexer::{tokenize, SourceBuffer};

use super::{read_source, render_error, STDIN_PATH};

/// Per-run counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub passed: usize,
    pub failed: usize,
}

/// Tokenize one buffer. Returns the token count, or the rendered error.
pub fn check_source(source: &SourceBuffer) -> Result<usize, String> {
    match tokenize(source) {
        Ok(tokens) => Ok(tokens.len()),
        Err(err) => Err(render_error(&err)),
    }
}

/// Check every path, printing failures to stderr as they are found.
pub fn check_paths(paths: &[String]) -> CheckSummary {
    let passed = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    paths.par_iter().for_each(|path| {
        match read_source(path).and_then(|source| check_source(&source)) {
            Ok(count) => {
                tracing::debug!(path = %path, tokens = count, "checked");
                passed.fetch_add(1, Ordering::Relaxed);
            }
            Err(report) => {
                eprintln!("{report}");
                failed.fetch_add(1, Ordering::Relaxed);
            }
        }
    });

    CheckSummary {
        passed: passed.load(Ordering::Relaxed),
        failed: failed.load(Ordering::Relaxed),
    }
}

/// Entry point for `tomlc check [paths...]`. Exits with status 1 if any
/// input fails.
pub fn run_check(args: &[String]) {
    let paths = if args.is_empty() {
        vec![STDIN_PATH.to_owned()]
    } else {
        args.to_vec()
    };

    let summary = check_paths(&paths);

    if paths.len() > 1 {
        println!(
            "{} files checked: {} ok, {} with errors",
            paths.len(),
            summary.passed,
            summary.failed
        );
    }

    if summary.failed > 0 {
        std::process::exit(1);
    }
}
