//! # Stockpad CLI
//!
//! The binary is intentionally thin: argument parsing, the interactive shell,
//! and rendering live in `cli/`, and everything they call lives in the
//! `stockpad` library. This file only runs the CLI and turns an error into a
//! message on stderr and exit status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
