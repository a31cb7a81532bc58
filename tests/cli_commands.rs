//! End-to-end tests for the tasklist subcommands
//!
//! Each test runs the real binary against a task file in a temp directory,
//! with HOME pointed at the same directory so no user config leaks in.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestEnv {
    temp: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    fn task_file(&self) -> PathBuf {
        self.temp.path().join("tasks.json")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    fn run_on(&self, file: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_tasklist"))
            .args(args)
            .arg("--file")
            .arg(file)
            .env("HOME", self.temp.path())
            .env("XDG_CONFIG_HOME", self.temp.path().join(".config"))
            .env_remove("TASKLIST_FILE")
            .env_remove("TASKLIST_DEBUG")
            .output()
            .expect("Failed to run tasklist")
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_on(&self.task_file(), args)
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "tasklist {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }

    fn records(&self) -> Vec<serde_json::Value> {
        let content = fs::read_to_string(self.task_file()).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}

#[test]
fn test_add_creates_file_with_sequential_ids() {
    let env = TestEnv::new();
    let out = env.stdout(&["add", "Buy milk", "--due", "2024-01-01", "-p", "High"]);
    assert_eq!(out.trim(), "Added: 1: Buy milk (Priority: High)");
    env.stdout(&["add", "Call mom", "-d", "2024-01-02"]);

    let records = env.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["task_id"], 1);
    assert_eq!(records[0]["completed"], false);
    assert_eq!(records[1]["task_id"], 2);
    assert_eq!(records[1]["priority"], "Medium");
}

#[test]
fn test_add_rejects_blank_description() {
    let env = TestEnv::new();
    let output = env.run(&["add", "   ", "--due", "2024-01-01"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("description is required"));
    assert!(!env.task_file().exists());
}

#[test]
fn test_list_filters_by_keyword() {
    let env = TestEnv::new();
    env.stdout(&["add", "Buy milk", "--due", "mon"]);
    env.stdout(&["add", "Call mom", "--due", "tue"]);

    let out = env.stdout(&["list", "MILK"]);
    assert!(out.contains("Buy milk"));
    assert!(!out.contains("Call mom"));
    assert!(out.contains("Total: 1 of 2 tasks"));

    let out = env.stdout(&["ls", "nothing"]);
    assert!(out.contains("No tasks matching 'nothing'."));
}

#[test]
fn test_list_json_output() {
    let env = TestEnv::new();
    env.stdout(&["add", "Buy milk", "--due", "2024-01-01"]);

    let out = env.stdout(&["list", "--json"]);
    let records: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["description"], "Buy milk");
    assert_eq!(records[0]["due_date"], "2024-01-01");
}

#[test]
fn test_show_prints_details() {
    let env = TestEnv::new();
    env.stdout(&["add", "Buy milk", "--due", "2024-01-01", "-p", "Low"]);

    let out = env.stdout(&["show"]);
    assert!(out.contains("Task ID: 1\n"));
    assert!(out.contains("Description: Buy milk\n"));
    assert!(out.contains("Due Date: 2024-01-01\n"));
    assert!(out.contains("Priority: Low\n"));
    assert!(out.contains("Completed: false\n"));
}

#[test]
fn test_edit_changes_only_given_fields() {
    let env = TestEnv::new();
    env.stdout(&["add", "Buy milk", "--due", "2024-01-01", "-p", "High"]);
    env.stdout(&["edit", "1", "--priority", "Low"]);

    let records = env.records();
    assert_eq!(records[0]["description"], "Buy milk");
    assert_eq!(records[0]["due_date"], "2024-01-01");
    assert_eq!(records[0]["priority"], "Low");
}

#[test]
fn test_edit_without_changes_fails() {
    let env = TestEnv::new();
    env.stdout(&["add", "Buy milk", "--due", "2024-01-01"]);
    let output = env.run(&["edit", "1"]);
    assert!(!output.status.success());
}

#[test]
fn test_done_marks_completed() {
    let env = TestEnv::new();
    env.stdout(&["add", "Buy milk", "--due", "2024-01-01"]);
    let out = env.stdout(&["done", "1"]);
    assert!(out.contains("Completed: 1: Buy milk"));
    assert_eq!(env.records()[0]["completed"], true);
}

#[test]
fn test_unknown_id_is_reported() {
    let env = TestEnv::new();
    env.stdout(&["add", "Buy milk", "--due", "2024-01-01"]);
    for cmd in ["done", "remove"] {
        let output = env.run(&[cmd, "42"]);
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Task not found: 42"));
    }
    assert_eq!(env.records().len(), 1);
}

#[test]
fn test_ids_continue_from_highest_in_file() {
    let env = TestEnv::new();
    env.stdout(&["add", "a", "--due", "x"]);
    env.stdout(&["add", "b", "--due", "x"]);
    env.stdout(&["rm", "2"]);
    env.stdout(&["add", "c", "--due", "x"]);

    let ids: Vec<u64> = env
        .records()
        .iter()
        .map(|r| r["task_id"].as_u64().unwrap())
        .collect();
    // Each run starts counting after the highest id left in the file
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_export_then_import_round_trip() {
    let env = TestEnv::new();
    env.stdout(&["add", "Buy milk", "--due", "2024-01-01", "-p", "High"]);
    env.stdout(&["done", "1"]);

    let exported = env.path("backup.json");
    let out = env.stdout(&["export", exported.to_str().unwrap()]);
    assert!(out.contains("Tasks saved to"));

    let other = env.path("other.json");
    let output = env.run_on(&other, &["import", exported.to_str().unwrap()]);
    assert!(output.status.success());

    let content = fs::read_to_string(&other).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(records, env.records());
}

#[test]
fn test_malformed_import_leaves_working_file() {
    let env = TestEnv::new();
    env.stdout(&["add", "Buy milk", "--due", "2024-01-01"]);
    let before = fs::read_to_string(env.task_file()).unwrap();

    let bad = env.path("bad.json");
    fs::write(&bad, r#"[{"task_id": 1, "description": "x"}]"#).unwrap();
    let output = env.run(&["import", bad.to_str().unwrap()]);
    assert!(!output.status.success());

    assert_eq!(fs::read_to_string(env.task_file()).unwrap(), before);
}

#[test]
fn test_malformed_working_file_is_error() {
    let env = TestEnv::new();
    fs::write(env.task_file(), "{ not json").unwrap();
    let output = env.run(&["list"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open"));
}

#[test]
fn test_completion_needs_no_task_file() {
    let env = TestEnv::new();
    let out = env.stdout(&["completion", "bash"]);
    assert!(out.contains("tasklist"));
    assert!(!env.task_file().exists());
}

#[test]
fn test_explicit_file_ignores_broken_config() {
    let env = TestEnv::new();
    let config_dir = env.temp.path().join(".config").join("tasklist");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "theme = [not valid").unwrap();

    env.stdout(&["add", "Buy milk", "--due", "2024-01-01"]);
    let out = env.stdout(&["list"]);
    assert!(out.contains("Buy milk"));
}
