//! tasks - single-user JSON-backed todo CLI.
//!
//! Add, list, search, and get random recommendations from a flat task
//! list stored in one JSON file.

use clap::Parser;
use taskdeck::cli::tasks::Cli;
use taskdeck::output::{emit_error, init_tracing};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        emit_error(&err);
        std::process::exit(err.exit_code());
    }
}
