/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

#[test]
fn binary_shows_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("termfire"),
        "Help output should mention termfire"
    );
    assert!(stdout.contains("--seed"), "Help output should list --seed");
}

#[test]
fn binary_shows_version() {
    let output = Command::new("cargo")
        .args(["run", "--", "--version"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn invalid_flag_fails_gracefully() {
    let output = Command::new("cargo")
        .args(["run", "--", "--nonexistent-flag"])
        .output()
        .expect("Failed to execute cargo run");

    // Should fail with error, not panic
    assert!(
        !output.status.success(),
        "Invalid flag should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("panicked at"),
        "Invalid flag should not cause panic"
    );
}

#[test]
fn zero_frames_is_rejected() {
    let output = Command::new("cargo")
        .args(["run", "--", "--print", "--frames", "0"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(!output.status.success(), "--frames 0 should be rejected");
}

#[test]
fn print_mode_renders_a_frame() {
    let output = Command::new("cargo")
        .args(["run", "--", "--print", "--frames", "5", "--seed", "1"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Print mode failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains('▀'), "Print mode should draw half blocks");
    assert!(stdout.contains("\x1b[48;2;"), "Print mode should use true color");
}
