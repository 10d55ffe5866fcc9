#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary directory holding one store file.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn write_store(&self, contents: &str) {
        fs::write(self.file(), contents).expect("write store");
    }

    pub fn read_store(&self) -> String {
        fs::read_to_string(self.file()).expect("read store")
    }
}

/// `tasks` command pointed at the test store.
pub fn tasks_cmd(store: &TestStore) -> Command {
    let mut cmd = tasks_bin();
    cmd.arg("--file").arg(store.file());
    cmd
}

/// `tasks` command with no store flag (for env/default-path tests).
pub fn tasks_bin() -> Command {
    let mut cmd = Command::cargo_bin("tasks").expect("binary");
    cmd.env_remove("TASKS_FILE");
    cmd
}

/// `taskmgr` command pointed at the test store.
pub fn taskmgr_cmd(store: &TestStore) -> Command {
    let mut cmd = taskmgr_bin();
    cmd.arg("--file").arg(store.file());
    cmd
}

/// `taskmgr` command with no store flag (for env/default-path tests).
pub fn taskmgr_bin() -> Command {
    let mut cmd = Command::cargo_bin("taskmgr").expect("binary");
    cmd.env_remove("TASKMGR_FILE");
    cmd
}

/// Create a user and return the id printed on the `CREATED` line.
pub fn create_user(store: &TestStore, name: &str) -> String {
    let output = taskmgr_cmd(store)
        .args(["create-user", name])
        .output()
        .expect("run create-user");
    assert!(output.status.success(), "create-user failed: {output:?}");
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    stdout
        .trim()
        .strip_prefix("CREATED ")
        .expect("CREATED line")
        .to_string()
}

/// Add a task and return the id printed on the `TASK-ADDED` line.
pub fn add_task(store: &TestStore, user_id: &str, title: &str, due: &str) -> String {
    let output = taskmgr_cmd(store)
        .args(["add-task", user_id, "--title", title, "--due", due])
        .output()
        .expect("run add-task");
    assert!(output.status.success(), "add-task failed: {output:?}");
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    stdout
        .trim()
        .strip_prefix("TASK-ADDED ")
        .expect("TASK-ADDED line")
        .to_string()
}
