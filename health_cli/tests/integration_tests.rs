//! Integration tests for the healthlog binary.
//!
//! These tests verify end-to-end behavior including:
//! - One-shot summary, advice, BMI and tip commands
//! - Interactive session scripts on stdin
//! - Config file overrides
//! - Input validation and exit codes

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("healthlog"))
}

/// Helper to write a config file into a fresh temp dir
fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    (temp_dir, path)
}

/// Helper for a config that only pins the tip seed
fn default_config() -> (TempDir, PathBuf) {
    write_config("[tips]\nseed = 1\n")
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal health logging tool"));
}

#[test]
fn test_bmi_normal() {
    let (_dir, config) = default_config();

    cli()
        .arg("bmi")
        .arg("--config")
        .arg(&config)
        .args(["--weight", "70", "--height", "175"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your BMI is: 22.86"))
        .stdout(predicate::str::contains("Category: Normal weight"));
}

#[test]
fn test_bmi_underweight() {
    let (_dir, config) = default_config();

    cli()
        .arg("bmi")
        .arg("--config")
        .arg(&config)
        .args(["--weight", "45", "--height", "160"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17.58"))
        .stdout(predicate::str::contains("Underweight"));
}

#[test]
fn test_bmi_rejects_non_positive() {
    let (_dir, config) = default_config();

    cli()
        .arg("bmi")
        .arg("--config")
        .arg(&config)
        .args(["--weight", "-1", "--height", "170"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter valid weight and height"));

    cli()
        .arg("bmi")
        .arg("--config")
        .arg(&config)
        .args(["--weight", "70", "--height", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_advise_multiple_matches() {
    let (_dir, config) = default_config();

    let output = cli()
        .arg("advise")
        .arg("--config")
        .arg(&config)
        .arg("I have a headache and a fever")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&output);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("For headaches"));
    assert!(lines[1].starts_with("For a fever"));
}

#[test]
fn test_advise_fallback() {
    let (_dir, config) = default_config();

    cli()
        .arg("advise")
        .arg("--config")
        .arg(&config)
        .args(["purple", "elephants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("consult a healthcare professional"));
}

#[test]
fn test_advise_blank_is_rejected() {
    let (_dir, config) = default_config();

    cli()
        .arg("advise")
        .arg("--config")
        .arg(&config)
        .arg("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter your symptoms."));
}

#[test]
fn test_summary_accumulates_flags() {
    let (_dir, config) = default_config();

    cli()
        .arg("summary")
        .arg("--config")
        .arg(&config)
        .args(["--steps", "4000", "--steps", "6000"])
        .args(["--water", "1.0", "--water", "1.5"])
        .args(["--sleep", "7.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total steps: 10000 (Recommended: 10000) [✓]",
        ))
        .stdout(predicate::str::contains("Total water intake: 2.50 liters"))
        .stdout(predicate::str::contains(
            "Total sleep: 7.90 hours (Recommended: 8.00 hours) [✗]",
        ));
}

#[test]
fn test_summary_json() {
    let (_dir, config) = default_config();

    let output = cli()
        .arg("summary")
        .arg("--config")
        .arg(&config)
        .args(["--steps", "9999", "--water", "1.9", "--sleep", "7.9", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(summary["steps"], 9999);
    assert_eq!(summary["meets_steps"], false);
    assert_eq!(summary["meets_water"], false);
    assert_eq!(summary["meets_sleep"], false);
}

#[test]
fn test_summary_rejects_negative_water() {
    let (_dir, config) = default_config();

    cli()
        .arg("summary")
        .arg("--config")
        .arg(&config)
        .args(["--water", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));
}

#[test]
fn test_custom_thresholds_from_config() {
    let (_dir, config) = write_config(
        r#"
[thresholds]
steps = 5000
"#,
    );

    cli()
        .arg("summary")
        .arg("--config")
        .arg(&config)
        .args(["--steps", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total steps: 5000 (Recommended: 5000) [✓]",
        ));
}

#[test]
fn test_custom_advice_table_from_config() {
    let (_dir, config) = write_config(
        r#"
[advice]
fallback = "Ask your pharmacist."

[[advice.entries]]
keyword = "dizzy"
advice = "Sit down and drink some water."
"#,
    );

    cli()
        .arg("advise")
        .arg("--config")
        .arg(&config)
        .arg("Feeling DIZZY today")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sit down and drink some water."));

    cli()
        .arg("advise")
        .arg("--config")
        .arg(&config)
        .arg("headache")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ask your pharmacist."));
}

#[test]
fn test_malformed_config_fails() {
    let (_dir, config) = write_config("[thresholds\n");

    cli()
        .arg("tip")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_seeded_tip_is_reproducible() {
    let (_dir, config) = default_config();

    let run = || {
        cli()
            .arg("tip")
            .arg("--config")
            .arg(&config)
            .args(["--seed", "99"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    let first = run();
    assert_eq!(first, run());
    assert!(String::from_utf8_lossy(&first).starts_with("Health Tip: "));
}

#[test]
fn test_session_script() {
    let (_dir, config) = default_config();

    cli()
        .arg("session")
        .arg("--config")
        .arg(&config)
        .write_stdin("steps 4000\nsteps 7000\nwater 2\nsleep 8\nsummary\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 7000 steps. Total steps: 11000"))
        .stdout(predicate::str::contains(
            "Total steps: 11000 (Recommended: 10000) [✓]",
        ))
        .stdout(predicate::str::contains(
            "Total sleep: 8.00 hours (Recommended: 8.00 hours) [✓]",
        ));
}

#[test]
fn test_session_is_default_command() {
    let (_dir, config) = default_config();

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("bmi 50 160\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your BMI is: 19.53"));
}

#[test]
fn test_session_warnings_keep_going() {
    let (_dir, config) = default_config();

    cli()
        .arg("session")
        .arg("--config")
        .arg(&config)
        .write_stdin("advise\nbmi 70 0\nfly away\nappointment 2024-02-30 Dr. Lee\nsteps 12\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter your symptoms."))
        .stdout(predicate::str::contains("Please enter valid weight and height values."))
        .stdout(predicate::str::contains("Unknown command 'fly'"))
        .stdout(predicate::str::contains("Invalid date '2024-02-30'"))
        .stdout(predicate::str::contains("Total steps: 12"));
}

#[test]
fn test_session_appointment_and_records() {
    let (dir, config) = default_config();
    let records = dir.path().join("records.pdf");
    fs::write(&records, b"%PDF-1.4").unwrap();

    cli()
        .arg("session")
        .arg("--config")
        .arg(&config)
        .write_stdin(format!(
            "doctors\nappointment 2024-06-01 Dr. Johnson\nrecords {}\n",
            records.display()
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Dr. Smith"))
        .stdout(predicate::str::contains(
            "Appointment with Dr. Johnson on 2024-06-01.",
        ))
        .stdout(predicate::str::contains("Uploaded medical records from"));
}

#[test]
fn test_missing_logo_is_not_fatal() {
    let (dir, config) = write_config("");
    let logo = dir.path().join("logo.png");
    fs::write(
        &config,
        format!("[assets]\nlogo_path = {:?}\n", logo.display().to_string()),
    )
    .unwrap();

    cli()
        .arg("bmi")
        .arg("--config")
        .arg(&config)
        .args(["--weight", "70", "--height", "175"])
        .assert()
        .success()
        .stdout(predicate::str::contains("22.86"));
}
