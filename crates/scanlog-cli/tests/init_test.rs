#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_creates_starter_settings() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scanlog"));
    cmd.current_dir(root)
        .arg("init")
        .arg("--root-name")
        .arg("oop-23-TD")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully created"));

    let content = fs::read_to_string(root.join("scanlog.toml")).unwrap();
    assert!(content.contains("root_name = \"oop-23-TD\""));
    assert!(content.contains("com.gradle.develocity"));
    assert!(content.contains("terms_of_use_agree = \"no\""));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("scanlog.toml"), "[project]\nroot_name = \"keep\"\n").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scanlog"));
    cmd.current_dir(root)
        .arg("init")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    let content = fs::read_to_string(root.join("scanlog.toml")).unwrap();
    assert!(content.contains("keep"));
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("scanlog.toml"), "[project]\nroot_name = \"old\"\n").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scanlog"));
    cmd.current_dir(root)
        .arg("init")
        .arg("--force")
        .arg("--root-name")
        .arg("fresh")
        .assert()
        .success();

    let content = fs::read_to_string(root.join("scanlog.toml")).unwrap();
    assert!(content.contains("root_name = \"fresh\""));
}

#[test]
fn test_generated_settings_pass_check() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scanlog"));
    cmd.current_dir(root)
        .arg("init")
        .arg("--root-name")
        .arg("demo")
        .assert()
        .success();

    // Warnings are fine (terms not agreed yet); errors are not.
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scanlog"));
    cmd.current_dir(root)
        .arg("settings")
        .arg("check")
        .assert()
        .success();
}
