//! Single-user task model for the `tasks` binary.
//!
//! The store document is a flat JSON array of task records. Ids are
//! integers assigned as max(existing)+1 (1 when the store is empty);
//! removal is not supported in this variant, so ids stay unique for the
//! life of the store.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category applied when none is supplied (or stored).
pub const DEFAULT_CATEGORY: &str = "general";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A task record as persisted in the store.
///
/// Records are only created through [`Task::create`]; older stores may
/// lack `category` or `done`, which deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub created: String,
    pub tags: Vec<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Validating constructor.
    ///
    /// Trims the title and rejects an empty result, splits the
    /// comma-separated tag input, defaults the category to
    /// [`DEFAULT_CATEGORY`], and stamps the creation time.
    pub fn create(id: u64, title: &str, tags: &str, category: Option<&str>) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        let category = match category.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => default_category(),
        };
        Ok(Self {
            id,
            title: title.to_string(),
            created: now_utc(),
            tags: split_tags(tags),
            category,
            done: false,
        })
    }
}

/// Next id for a collection: max(existing) + 1, or 1 when empty.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1)
}

/// Split a comma-separated tag list, trimming each segment and dropping
/// empties. An empty input yields an empty vec, not `[""]`.
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Current time as ISO-8601 UTC with a trailing `Z`.
pub fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
