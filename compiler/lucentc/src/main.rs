//! Lucent CLI
//!
//! Inspects how the indentation scanner structures a Lucent source file.

use lucentc::commands::{lex_file, parse_lex_args, CommandError};

fn main() {
    lucentc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => parse_lex_args(&args[2..]).and_then(|(path, options)| lex_file(&path, &options)),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("lucent {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => Err(CommandError::Usage(format!("unknown command '{command}'"))),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if err.is_usage() {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Lucent indentation scanner {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: lucent <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>     Print the structural token stream of a file");
    println!("  help           Show this help message");
    println!("  version        Show version information");
    println!();
    println!("Lex options:");
    println!("  --no-content   Show only OPEN, CLOSE and LEVEL tokens");
    println!("  --state        Append the scanner's current/target depth to each token");
    println!();
    println!("Set RUST_LOG=lucent_lexer_core=trace to trace every scanner decision.");
}
