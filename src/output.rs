//! Shared output and startup helpers for the taskdeck CLIs.
//!
//! Every user-facing error is a single stderr line of the form
//! `ERROR <code> <message>`, so scripts can branch on the leading token
//! without parsing prose.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Error;

/// Render the single-line form of an error.
pub fn error_line(err: &Error) -> String {
    format!("ERROR {} {}", err.exit_code(), err)
}

/// Print an error to stderr.
pub fn emit_error(err: &Error) {
    eprintln!("{}", error_line(err));
}

/// Initialize tracing from `RUST_LOG`.
///
/// Tracing is opt-in; the default is off so stdout/stderr stay stable for
/// scripts. Invalid or oversized filters are ignored rather than failing
/// startup.
pub fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line_leads_with_code_token() {
        let line = error_line(&Error::UserNotFound("abc".to_string()));
        assert_eq!(line, "ERROR 3 user-not-found");

        let line = error_line(&Error::EmptyDisplayName);
        assert_eq!(line, "ERROR 2 display_name must be non-empty");
    }
}
