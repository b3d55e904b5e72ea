//! `tomlc`: check and inspect TOML files at the token level.

use tomlc::commands::{run_check, run_lex, STDIN_PATH};

fn main() {
    tomlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => run_check(&args[2..]),
        "lex" => {
            if args.len() > 3 {
                eprintln!("Usage: tomlc lex [file.toml|-]");
                std::process::exit(1);
            }
            run_lex(args.get(2).map_or(STDIN_PATH, String::as_str));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("tomlc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("TOML tokenizer");
    println!();
    println!("Usage: tomlc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check [paths...]     Tokenize files and report lexical errors");
    println!("  lex [file.toml]      Tokenize a file and display the tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("A path of `-`, or no path at all, reads from stdin.");
    println!("Set RUST_LOG (e.g. RUST_LOG=toml_lexer=debug) to enable logging.");
    println!();
    println!("Examples:");
    println!("  tomlc check Cargo.toml config/*.toml");
    println!("  cat Cargo.toml | tomlc check");
    println!("  tomlc lex Cargo.toml");
}
