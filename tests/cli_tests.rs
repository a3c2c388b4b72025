//! End-to-end runs of the roster binary

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

const SEPARATOR: &str = "-----------------------------";

fn run_roster(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roster"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("roster binary should run")
}

#[test]
fn test_default_run_prints_sorted_report() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let output = run_roster(&[], dir.path());
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    assert_eq!(stdout.lines().filter(|line| *line == SEPARATOR).count(), 7);

    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("Name: "))
        .collect();
    assert_eq!(
        names,
        vec![
            "Abby Recker",
            "Bethany Thompson",
            "Helen Bayer",
            "Mike Adams",
            "Mike Smith",
            "Tobias Miller",
        ]
    );
    assert!(stdout.contains("Name: Abby Recker\nAge: 22\nSalary: 33761.85\n"));

    let csv = fs::read_to_string(dir.path().join("employees.csv"))
        .expect("default roster file should exist");
    assert!(csv.starts_with("Name,Age,Salary\n"));
}

#[test]
fn test_output_flag_sets_destination() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let output = run_roster(&["-o", "staff.csv"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("staff.csv").exists());
    assert!(!dir.path().join("employees.csv").exists());
}

#[test]
fn test_write_failure_is_reported_and_exits_zero() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let target = dir.path().to_string_lossy().to_string();
    let output = run_roster(&["-o", target.as_str()], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    assert!(stdout.starts_with("Failed to create roster file at"));
    assert!(!stdout.contains(SEPARATOR));
}

#[test]
fn test_invalid_arguments_exit_nonzero() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let output = run_roster(&["--no-such-flag"], dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
