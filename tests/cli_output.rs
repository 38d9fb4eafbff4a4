//! Runs the `ptrack` binary and checks what ends up on which stream.

use std::process::Command;

use tempfile::tempdir;

#[test]
fn test_console_logs_do_not_mix_with_printed_view() {
    let dir = tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ptrack"))
        .args(["--log", "--no-color", "--server", "http://127.0.0.1:9/api", "--dir"])
        .arg(dir.path())
        .arg("today")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(stdout.lines().count(), 1, "unexpected stdout: {stdout}");
    assert!(stdout.starts_with("Today: "));
    assert!(stderr.contains("Using backend"));
}

#[test]
fn test_logs_are_also_written_to_application_dir() {
    let dir = tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ptrack"))
        .args(["--server", "http://127.0.0.1:9/api", "--dir"])
        .arg(dir.path())
        .arg("today")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(dir.path().join("logs").is_dir());
}
