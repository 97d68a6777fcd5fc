use std::process::{Command, Output};

fn run_sim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sub_shop"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(args)
        .env("RUST_LOG", "warn,sub_shop=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Test that the simulation runs in headless mode without crashing
#[test]
fn test_headless_simulation_runs() {
    let output = run_sim(&["--seed", "7", "--ticks", "3", "--restock", "1"]);

    assert!(
        output.status.success(),
        "Simulation failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Final State ==="), "stdout: {}", stdout);
    assert!(stdout.contains("--- Tick 1:"), "stdout: {}", stdout);
    assert!(stdout.contains("=== Customer Summary ==="));
}

/// Test that customer ticks are logged
#[test]
fn test_customer_ticks_logged() {
    let output = run_sim(&["--seed", "7", "--ticks", "2"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Customer tick:"),
        "Missing tick log. stderr: {}",
        stderr
    );
}

/// Test that a missing save is reported but not fatal
#[test]
fn test_missing_save_is_not_fatal() {
    let save = std::env::temp_dir().join(format!("sub_shop_cli_missing_{}.json", std::process::id()));
    let save = save.to_string_lossy().to_string();

    let output = run_sim(&["--ticks", "1", "--load", "--save-file", &save]);

    assert!(output.status.success(), "Simulation failed to run");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Save file not found"), "stderr: {}", stderr);
}

/// Test that a saved game can be picked up by a later run
#[test]
fn test_save_and_continue() {
    let save = std::env::temp_dir().join(format!("sub_shop_cli_save_{}.json", std::process::id()));
    let save_arg = save.to_string_lossy().to_string();

    let first = run_sim(&[
        "--seed", "3", "--ticks", "1", "--restock", "1", "--save", "--save-file", &save_arg,
    ]);
    assert!(first.status.success(), "First run failed");
    assert!(save.exists());

    let second = run_sim(&[
        "--seed", "3", "--ticks", "1", "--load", "--business-day", "--save-file", &save_arg,
    ]);
    std::fs::remove_file(&save).ok();

    assert!(second.status.success(), "Second run failed");
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("--- Business day:"), "stdout: {}", stdout);
}
