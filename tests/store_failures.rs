mod support;

use predicates::str::contains;

use support::{taskmgr_bin, tasks_cmd, taskmgr_cmd, TestStore};

#[test]
fn tasks_refuses_malformed_store() {
    let store = TestStore::new();
    store.write_store("{not json");

    tasks_cmd(&store)
        .arg("list")
        .assert()
        .code(5)
        .stderr(contains("ERROR 5"));

    // The broken file stays as-is for the operator to inspect.
    assert_eq!(store.read_store(), "{not json");
}

#[test]
fn tasks_refuses_wrong_shape() {
    let store = TestStore::new();
    store.write_store(r#"{"tasks": []}"#);

    tasks_cmd(&store)
        .args(["add", "Buy milk"])
        .assert()
        .code(5)
        .stderr(contains("ERROR 5"));

    assert_eq!(store.read_store(), r#"{"tasks": []}"#);
}

#[test]
fn taskmgr_refuses_malformed_store() {
    let store = TestStore::new();
    store.write_store("[1, 2,");

    taskmgr_cmd(&store)
        .arg("list-users")
        .assert()
        .code(5)
        .stderr(contains("ERROR 5"));
}

#[test]
fn taskmgr_default_path_creates_parent_directory() {
    let store = TestStore::new();

    taskmgr_bin()
        .current_dir(store.path())
        .args(["create-user", "Ada"])
        .assert()
        .success();

    assert!(store.path().join("data").join("tasks.json").exists());
}

#[test]
fn taskmgr_env_var_selects_store() {
    let store = TestStore::new();

    let mut cmd = taskmgr_bin();
    cmd.env("TASKMGR_FILE", store.file());
    cmd.args(["create-user", "Ada"]).assert().success();

    assert!(store.file().exists());
}
