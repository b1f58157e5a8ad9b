//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command with its preferences isolated in `temp_dir`
fn termfolio(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("termfolio").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("TERMFOLIO_PREFS", temp_dir.path().join("prefs.json"));
    cmd
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("termfolio").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("termfolio"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("termfolio").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A personal website rendered as a simulated shell",
        ))
        .stdout(predicate::str::contains("--exec"));
}

#[test]
fn test_exec_view_publications_prints_every_entry() {
    let temp_dir = TempDir::new().unwrap();
    termfolio(&temp_dir)
        .args(["--exec", "view publications"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abehou@stanford:~$ view publications"))
        .stdout(predicate::str::contains("paper1.txt"))
        .stdout(predicate::str::contains("paper2.txt"))
        .stdout(predicate::str::contains("Another Paper Title"));
}

#[test]
fn test_exec_runs_commands_in_order() {
    let temp_dir = TempDir::new().unwrap();
    termfolio(&temp_dir)
        .args(["-e", "cd blog", "-e", "pwd", "-e", "view post1.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changed directory to blog"))
        .stdout(predicate::str::contains("abehou@stanford:~/blog$ pwd\n~/blog\n"))
        .stdout(predicate::str::contains("[post1.txt]"));
}

#[test]
fn test_exec_reports_unknown_directory() {
    let temp_dir = TempDir::new().unwrap();
    termfolio(&temp_dir)
        .args(["--exec", "cd nowhere", "--exec", "pwd"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Directory not found: nowhere"))
        .stdout(predicate::str::contains("$ pwd\n~\n"));
}

#[test]
fn test_commands_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    termfolio(&temp_dir)
        .write_stdin("whoami\nfrobnicate\n")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("abehou\n"))
        .stdout(predicate::str::contains("Command not found: frobnicate"));
}

#[test]
fn test_plain_mode_prints_whole_site() {
    let temp_dir = TempDir::new().unwrap();
    termfolio(&temp_dir)
        .args(["--mode", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi! I am Abe Hou."))
        .stdout(predicate::str::contains("PUBLICATIONS"))
        .stdout(predicate::str::contains("post3.txt"));
}

#[test]
fn test_stored_plain_preference_is_honoured() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("prefs.json"),
        r#"{"mode":"plain","theme":"light"}"#,
    )
    .unwrap();

    termfolio(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi! I am Abe Hou."));
}

#[test]
fn test_custom_content_directory() {
    let temp_dir = TempDir::new().unwrap();
    let site = temp_dir.path().join("site");
    fs::create_dir(&site).unwrap();
    fs::write(site.join("site.yaml"), "type: site\nuser: ada\nhost: engine\n").unwrap();
    fs::write(site.join("me.yaml"), "type: document\ntext: Analyst.\n").unwrap();
    fs::write(
        site.join("publications.yaml"),
        "type: collection\nentries:\n  notes.txt:\n    title: Notes on the Engine\n",
    )
    .unwrap();
    fs::write(site.join("experiences.yaml"), "type: collection\nentries: {}\n").unwrap();
    fs::write(site.join("blog.yaml"), "type: collection\nentries: {}\n").unwrap();

    termfolio(&temp_dir)
        .arg("--content")
        .arg(&site)
        .args(["--exec", "view notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ada@engine:~$ view notes.txt"))
        .stdout(predicate::str::contains("Notes on the Engine"));
}

#[test]
fn test_missing_content_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    termfolio(&temp_dir)
        .arg("--content")
        .arg(temp_dir.path().join("absent"))
        .args(["--exec", "ls"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Content directory not found"));
}

#[test]
fn test_invalid_mode_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    termfolio(&temp_dir)
        .args(["--mode", "fancy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'fancy'"));
}
