//! Integration tests for the interactive menu.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_menu_exits_cleanly_on_choice_four() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("roadwatch").unwrap();
    cmd.current_dir(temp.path())
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye"));
}

#[test]
fn test_menu_reprompts_twice_then_exits() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("roadwatch").unwrap();
    cmd.current_dir(temp.path())
        .write_stdin("x\n9\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice").count(2))
        .stdout(predicate::str::contains("Goodbye"));
}

#[test]
fn test_menu_reports_gpu_probe_before_choices() {
    // The probe is informational: whatever the host has, the menu proceeds.
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("roadwatch").unwrap();
    cmd.current_dir(temp.path())
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking GPU"))
        .stdout(predicate::str::contains("[4] Exit"));
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("roadwatch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dataset"))
        .stdout(predicate::str::contains("resume"))
        .stdout(predicate::str::contains("checkpoints"));
}
