//! Command-line surfaces for taskdeck.
//!
//! Two binaries share this crate: `tasks` (single-user flat list) and
//! `taskmgr` (multi-user store). Each surface is defined with clap
//! derive macros in its own submodule and dispatched from its own
//! `main`.

pub mod taskmgr;
pub mod tasks;
