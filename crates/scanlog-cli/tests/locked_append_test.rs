#![allow(deprecated)]
use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_locked_record_appends_exactly_one_line() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scanlog"));
    cmd.current_dir(root)
        .arg("record")
        .arg("abc123")
        .arg("https://scans.example/abc123")
        .arg("--locked")
        .assert()
        .success();

    let content = fs::read_to_string(root.join("scan-journal.log")).unwrap();
    assert_eq!(content, "abc123 - https://scans.example/abc123\n");
    assert!(root.join("scan-journal.log.lock").exists());
}

#[test]
fn test_locked_and_unlocked_records_share_one_journal() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scanlog"));
    cmd.current_dir(root)
        .arg("record")
        .arg("a")
        .arg("u1")
        .arg("--locked")
        .assert()
        .success();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scanlog"));
    cmd.current_dir(root)
        .arg("record")
        .arg("b")
        .arg("u2")
        .assert()
        .success();

    let content = fs::read_to_string(root.join("scan-journal.log")).unwrap();
    assert_eq!(content, "a - u1\nb - u2\n");
}
