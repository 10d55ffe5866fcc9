//! taskdeck - JSON-file-backed personal task tracking.
//!
//! Two binaries share this crate:
//!
//! - **`tasks`**: a single-user flat task list with integer ids, tags,
//!   categories, completion flags, and random recommendations
//! - **`taskmgr`**: a multi-user store keyed by owner, with opaque ids
//!   and due dates
//!
//! Every command loads the whole store document, works on the in-memory
//! collection, and (for mutating commands) writes the whole document back
//! through an atomic temp-file-then-rename sequence.
//!
//! # Module Organization
//!
//! - `cli`: command surfaces using clap
//! - `error`: error taxonomy and exit-code mapping
//! - `output`: stderr error lines and tracing setup
//! - `query`: pure filter/search/sample functions
//! - `roster`: multi-user document and entity factories
//! - `store`: atomic JSON document store
//! - `task`: single-user document and entity factory

pub mod cli;
pub mod error;
pub mod output;
pub mod query;
pub mod roster;
pub mod store;
pub mod task;

pub use error::{Error, Result};
