//! Multi-user roster model for the `taskmgr` binary.
//!
//! Users and their tasks are siblings inside one persisted document. Ids
//! are opaque 32-character lowercase hex strings, so identity is
//! decoupled from insertion order and safe across independent writers.
//! A task's owner reference is by id only; removing a user does not
//! cascade to their tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::task::now_utc;

/// Longest accepted category, in characters.
pub const MAX_CATEGORY_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
}

/// A task owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedTask {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub due_date: String,
    pub category: Option<String>,
    pub created_at: String,
}

/// The whole persisted document for one multi-user store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub tasks: Vec<OwnedTask>,
}

impl User {
    /// Validating constructor: trims the display name, rejects an empty
    /// result, and allocates a fresh opaque id.
    pub fn create(display_name: &str) -> Result<Self> {
        let name = display_name.trim();
        if name.is_empty() {
            return Err(Error::EmptyDisplayName);
        }
        Ok(Self {
            id: new_id(),
            display_name: name.to_string(),
        })
    }
}

impl OwnedTask {
    /// Validating constructor.
    ///
    /// Trims the title (rejecting an empty result), requires the due date
    /// to parse as a real `YYYY-MM-DD` calendar date, and caps the
    /// category at [`MAX_CATEGORY_LEN`] characters. Ownership of
    /// `user_id` is the caller's concern; the CLI checks the user exists
    /// before constructing the task.
    pub fn create(
        user_id: &str,
        title: &str,
        due_date: &str,
        category: Option<&str>,
    ) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        if NaiveDate::parse_from_str(due_date, "%Y-%m-%d").is_err() {
            return Err(Error::InvalidDueDate(due_date.to_string()));
        }
        if let Some(category) = category {
            let len = category.chars().count();
            if len > MAX_CATEGORY_LEN {
                return Err(Error::CategoryTooLong(len));
            }
        }
        Ok(Self {
            id: new_id(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            due_date: due_date.to_string(),
            category: category.map(str::to_string),
            created_at: now_utc(),
        })
    }
}

impl Roster {
    /// Find a user by id.
    pub fn find_user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == user_id)
    }

    /// Tasks owned by `user_id`, sorted by ascending task id.
    pub fn tasks_for(&self, user_id: &str) -> Vec<&OwnedTask> {
        let mut tasks: Vec<&OwnedTask> = self
            .tasks
            .iter()
            .filter(|task| task.user_id == user_id)
            .collect();
        tasks.sort_by(|a, b| a.id.cmp(&b.id));
        tasks
    }

    /// Remove the task matching both id and owner.
    ///
    /// Returns true when an entry was removed.
    pub fn remove_task(&mut self, user_id: &str, task_id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks
            .retain(|task| !(task.id == task_id && task.user_id == user_id));
        before != self.tasks.len()
    }
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
