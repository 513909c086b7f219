use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tf-similarity"))
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn wrong_argument_count_prints_usage_and_exits_1() {
    let out = bin().output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage"), "stdout: {stdout}");

    let out = bin().args(["a", "b", "c", "d"]).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn help_exits_0() {
    let out = bin().arg("--help").output().unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage"));

    let out = bin().arg("--version").output().unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn identical_documents_write_100_percent() {
    let dir = TempDir::new().unwrap();
    let orig = write(dir.path(), "orig.txt", "今天是星期天，天气晴，今天晚上我要去看电影。");
    let copy = write(dir.path(), "copy.txt", "今天是星期天，天气晴，今天晚上我要去看电影。");
    let out_path = dir.path().join("out.txt");

    let status = bin()
        .args([&orig, &copy, out_path.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read_to_string(&out_path).unwrap(), "Similarity: 100.00%");
}

#[test]
fn partial_overlap_is_formatted_with_two_decimals() {
    let dir = TempDir::new().unwrap();
    let orig = write(dir.path(), "orig.txt", "a b a c");
    let other = write(dir.path(), "other.txt", "a d");
    let out_path = dir.path().join("out.txt");
    fs::write(&out_path, "stale content from a previous run").unwrap();

    let status = bin()
        .args([&orig, &other, out_path.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());
    // 1 / (sqrt(1.5) * sqrt(2)) = 0.57735...
    assert_eq!(fs::read_to_string(&out_path).unwrap(), "Similarity: 57.74%");
}

#[test]
fn missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let orig = write(dir.path(), "orig.txt", "some text");
    let missing = dir.path().join("missing.txt");
    let out_path = dir.path().join("out.txt");

    let out = bin()
        .args([orig.as_str(), missing.to_str().unwrap(), out_path.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing.txt"));
    assert!(!out_path.exists());
}

#[test]
fn two_empty_documents_fail() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a.txt", "");
    let b = write(dir.path(), "b.txt", "...");
    let out_path = dir.path().join("out.txt");

    let out = bin()
        .args([&a, &b, out_path.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(!out_path.exists());
}

#[test]
fn forced_language_flag() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a.txt", "hello, world");
    let b = write(dir.path(), "b.txt", "helloworld");
    let out_path = dir.path().join("out.txt");

    // the chinese path drops the separators, so both become one term
    let status = bin()
        .args(["--language", "chinese", &a, &b, out_path.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read_to_string(&out_path).unwrap(), "Similarity: 100.00%");
}
