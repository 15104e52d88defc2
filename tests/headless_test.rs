use std::process::Command;

/// Test that the game runs in headless mode without crashing
#[test]
fn test_headless_session_runs() {
    let output = Command::new(env!("CARGO_BIN_EXE_taxi_sim"))
        .args(["--unpaced", "--seed", "7", "--map-every", "0"])
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute taxi_sim");

    assert!(
        output.status.success(),
        "Session failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("SESSION COMPLETE"),
        "Session did not complete properly. stdout: {}",
        stdout
    );
    assert!(stdout.contains("Customers"), "Missing customer summary");
}

/// Test that a malformed script is reported as an error
#[test]
fn test_headless_rejects_bad_script() {
    let output = Command::new(env!("CARGO_BIN_EXE_taxi_sim"))
        .args(["--unpaced", "--script", "fly*3"])
        .output()
        .expect("Failed to execute taxi_sim");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid drive script"), "stderr: {}", stderr);
}
