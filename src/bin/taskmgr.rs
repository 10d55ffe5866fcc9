//! taskmgr - multi-user JSON-backed task manager.
//!
//! Keeps a user roster and per-user tasks with due dates in one JSON
//! file.

use clap::Parser;
use taskdeck::cli::taskmgr::Cli;
use taskdeck::output::{emit_error, init_tracing};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        emit_error(&err);
        std::process::exit(err.exit_code());
    }
}
