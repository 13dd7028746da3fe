use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

fn handle_charsets() -> Command {
    Command::cargo_bin("handle-charsets").unwrap()
}

fn write_tree(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_converts_a_tree_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    let tra = temp.path().join("tra");
    let out = temp.path().join("out");
    write_tree(&tra, "english/dialog.tra", "@1 = ~Hello~\n");
    write_tree(&tra, "english/setup.tra", "@2 = ~Installing...~\n");

    handle_charsets()
        .args(["--tra-path", tra.to_str().unwrap()])
        .args(["--out-path", out.to_str().unwrap()])
        .assert()
        .success();

    let dialog = fs::read_to_string(out.join("english/dialog.tra")).unwrap();
    assert!(dialog.starts_with("// Do not edit manually."));
    assert!(dialog.ends_with("@1 = ~Hello~\n"));
    assert!(out.join("english/setup.tra").exists());
}

#[test]
fn test_prints_a_progress_line_per_file() {
    let temp = TempDir::new().unwrap();
    let tra = temp.path().join("tra");
    let out = temp.path().join("out");
    write_tree(&tra, "english/dialog.tra", "@1 = ~Hello~\n");

    let output = handle_charsets()
        .args(["--tra-path", tra.to_str().unwrap()])
        .args(["--out-path", out.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dialog.tra"));
    assert!(stdout.contains("windows-1252"));
    assert!(stdout.contains("UTF-8"));
}

#[test]
fn test_split_console_creates_platform_files() {
    let temp = TempDir::new().unwrap();
    let tra = temp.path().join("tra");
    let out = temp.path().join("out");
    write_tree(&tra, "english/setup.tra", "@1 = ~Installing...~\n");

    handle_charsets()
        .args(["--tra-path", tra.to_str().unwrap()])
        .args(["--out-path", out.to_str().unwrap()])
        .arg("--split-console")
        .assert()
        .success();

    for name in ["setup-win32.tra", "setup-unix.tra", "setup-osx.tra"] {
        assert!(out.join("english").join(name).exists(), "{name} missing");
    }
    assert!(!out.join("english/setup.tra").exists());
}

#[test]
fn test_unknown_language_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let tra = temp.path().join("tra");
    let out = temp.path().join("out");
    write_tree(&tra, "klingon/dialog.tra", "@1 = ~nuqneH~\n");

    let output = handle_charsets()
        .args(["--tra-path", tra.to_str().unwrap()])
        .args(["--out-path", out.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to infer encoding"));
    assert!(stderr.contains("klingon"));
    assert!(!out.join("klingon/dialog.tra").exists());
}

#[test]
fn test_missing_required_arguments_fail() {
    handle_charsets().assert().failure();

    let temp = TempDir::new().unwrap();
    handle_charsets()
        .args(["--tra-path", temp.path().to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_missing_tra_path_exits_nonzero() {
    let temp = TempDir::new().unwrap();

    handle_charsets()
        .args(["--tra-path", temp.path().join("no-such").to_str().unwrap()])
        .args(["--out-path", temp.path().join("out").to_str().unwrap()])
        .assert()
        .failure();
}
