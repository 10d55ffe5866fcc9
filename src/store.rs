//! JSON document store for taskdeck.
//!
//! One file per store. Every command loads the full document, operates on
//! the in-memory collection, and writes the full document back; there is
//! no partial or merge update. Writes go through a temp-file-then-rename
//! sequence so the target path always holds either the previous or the
//! new complete state.
//!
//! Concurrent invocations against the same file are not coordinated: two
//! writers can both read the same prior state, and the second save wins.
//! Known limitation of a single-user tool.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::Result;

/// File-backed JSON document store.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store over the given file path.
    ///
    /// The path is resolved once at startup (flag, then environment
    /// variable, then the built-in default) and handed in here; it is
    /// never looked up again mid-operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, or the default (empty) document when the file
    /// does not exist yet.
    ///
    /// A file that exists but cannot be read or parsed is a fatal storage
    /// error; a corrupted store is never silently treated as empty.
    pub fn load<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file missing; starting empty");
            return Ok(T::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let document = serde_json::from_str(&content)?;
        Ok(document)
    }

    /// Persist the full document atomically.
    ///
    /// Creates the parent directory if needed, writes pretty-printed
    /// UTF-8 JSON to a temp file in the same directory, forces it to
    /// stable storage, then renames it over the target. The temp file is
    /// removed on any failure path.
    pub fn save<T: Serialize>(&self, document: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(document)?;
        let temp_path = self.path.with_extension("tmp");

        let written = write_and_rename(&temp_path, &self.path, json.as_bytes());
        if written.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        debug!(path = %self.path.display(), ok = written.is_ok(), "store save");
        written
    }
}

fn write_and_rename(temp_path: &Path, path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(temp_path, path)?;
    Ok(())
}
