//! # Bookshelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Domain failures (invalid input, duplicate ids, unknown books) are reported
//! as plain messages. Anything else is prefixed with `Error:`. Both exit with
//! status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        if e.is_user_error() {
            cli::print_error(&e.to_string());
        } else {
            cli::print_error(&format!("Error: {}", e));
        }
        std::process::exit(1);
    }
}
