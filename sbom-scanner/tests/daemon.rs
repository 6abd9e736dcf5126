//! Tests that run the daemon binary itself.

use std::net::TcpListener;
use std::process::Command;

use sbom_scanner::config::DEFAULT_PORT;

#[test]
fn exits_nonzero_when_port_taken() {
    // If something else already owns the port the daemon fails the same way.
    let _held = TcpListener::bind(("0.0.0.0", DEFAULT_PORT));

    let output = Command::new(env!("CARGO_BIN_EXE_sbom-scannerd"))
        .env_remove("JOURNAL_STREAM")
        .env("RUST_LOG", "info")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Failed to bind"), "stdout: {stdout}");
    assert!(!stdout.contains("sbom-scanner listening"), "stdout: {stdout}");
}
