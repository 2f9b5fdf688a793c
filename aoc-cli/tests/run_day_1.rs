//! Runs the `aoc` binary end to end against temporary input files

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

fn aoc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aoc"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("AOC_INPUT_DIR")
        .output()
        .expect("failed to run aoc")
}

#[test]
fn test_quiet_answers_from_input_dir() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("2020")).unwrap();
    fs::write(temp.path().join("2020").join("day01.txt"), EXAMPLE).unwrap();

    let dir = temp.path().to_str().unwrap();
    let output = aoc(&["--input-dir", dir, "-y", "2020", "-d", "1", "-q"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "514579\n241861950\n");
}

#[test]
fn test_explicit_input_file_single_part() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.txt");
    fs::write(&path, EXAMPLE).unwrap();

    let output = aoc(&["--input", path.to_str().unwrap(), "-d", "1", "-p", "2"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2020/01 Part 2: 241861950"), "{}", stdout);
    assert!(stdout.contains("--- Summary ---"));
    assert!(!stdout.contains("Part 1"));
}

#[test]
fn test_missing_input_fails() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().to_str().unwrap();
    let output = aoc(&["--input-dir", dir, "-y", "2020", "-d", "1", "-q"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input source not found"), "{}", stderr);
    assert!(stderr.contains("2 part(s) failed"), "{}", stderr);
}

#[test]
fn test_input_without_day_rejected() {
    let output = aoc(&["--input", "whatever.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration error"));
}
