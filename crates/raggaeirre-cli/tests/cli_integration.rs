//! CLI Integration Tests
//!
//! These tests run the `raggaeirre` binary end-to-end with every delay
//! switched off (`--fast`).

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// CLI command with no delays and an isolated config lookup
fn cli_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("raggaeirre").expect("Failed to find raggaeirre binary");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("RUST_LOG")
        .arg("--fast");
    cmd
}

// ============================================================================
// Donate
// ============================================================================

#[test]
fn test_paypal_donation() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args([
            "donate", "--amount", "1000", "--method", "paypal", "--name", "Amina", "--email",
            "amina@example.org",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Donating KES 1,000"))
        .stdout(predicate::str::contains("Paying KES 1,000 via paypal"))
        .stdout(predicate::str::contains(
            "Thank you for your KES 1,000 donation via paypal!",
        ));
}

#[test]
fn test_donation_without_amount_fails() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args(["donate", "--amount", "", "--method", "paypal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please select or enter a donation amount.",
        ));
}

#[test]
fn test_mpesa_requires_phone() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args([
            "donate", "--amount", "500", "--method", "mpesa", "--name", "Amina", "--email",
            "amina@example.org",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phone"));

    cli_cmd(&home)
        .args([
            "donate", "--amount", "500", "--method", "m-pesa", "--name", "Amina", "--email",
            "amina@example.org", "--phone", "0712345678",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("via mpesa"));
}

#[test]
fn test_bank_transfer_shows_details() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args(["donate", "--amount", "2500", "--method", "bank"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bank transfer details:"))
        .stdout(predicate::str::contains("SWIFT Code: KCBLKENX"))
        .stdout(predicate::str::contains("Thank you").not());
}

#[test]
fn test_unknown_method_rejected() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args(["donate", "--amount", "100", "--method", "cash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cash"));
}

#[test]
fn test_backend_failure() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args([
            "--fail", "donate", "--amount", "100", "--method", "paypal", "--name", "Amina",
            "--email", "amina@example.org",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "There was an error processing your donation. Please try again.",
        ));
}

// ============================================================================
// Volunteer
// ============================================================================

#[test]
fn test_volunteer_application() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args([
            "volunteer", "--name", "Otieno", "--email", "otieno@example.org", "--interest",
            "mentoring",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Submitting your application..."))
        .stdout(predicate::str::contains(
            "Your volunteer application has been submitted successfully",
        ));
}

#[test]
fn test_volunteer_invalid_email() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args(["volunteer", "--name", "Otieno", "--email", "otieno"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid email"));
}

// ============================================================================
// Gallery & Catalog
// ============================================================================

#[test]
fn test_gallery_lists_tiles() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .arg("gallery")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gallery (8 items):"))
        .stdout(predicate::str::contains("[2] Student Success Story (video)"));
}

#[test]
fn test_gallery_wraps_forward() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args(["gallery", "--open", "7", "--next", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item 1/8"));
}

#[test]
fn test_gallery_out_of_range() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args(["gallery", "--open", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_catalog_summary_and_json() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("KES 10,000"))
        .stdout(predicate::str::contains("Success Rate: 95%"));

    let output = cli_cmd(&home).args(["catalog", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["donation"]["amounts"][0], 500);
}

// ============================================================================
// Validate & Config
// ============================================================================

#[test]
fn test_validate_values() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args(["validate", "phone", "+254712345678"])
        .assert()
        .success();
    cli_cmd(&home)
        .args(["validate", "phone", "0612345678"])
        .assert()
        .failure();
    cli_cmd(&home)
        .args(["validate", "email", "a@b.co"])
        .assert()
        .success();
    cli_cmd(&home)
        .args(["validate", "amount", "12.345"])
        .assert()
        .failure();
}

#[test]
fn test_config_file_drives_outcome() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("site.json");
    std::fs::write(&config, r#"{ "simulated_outcome": "fail" }"#).unwrap();

    cli_cmd(&home)
        .args(["validate", "config"])
        .arg(&config)
        .assert()
        .success();

    cli_cmd(&home)
        .arg("--config")
        .arg(&config)
        .args([
            "volunteer", "--name", "Otieno", "--email", "otieno@example.org",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("There was an error"));
}

#[test]
fn test_journal_written() {
    let home = TempDir::new().unwrap();
    let logs = home.path().join("logs");

    cli_cmd(&home)
        .arg("-v")
        .arg("--journal")
        .arg(&logs)
        .args(["gallery", "--open", "0"])
        .assert()
        .success();

    let raw = std::fs::read_dir(logs.join("raw")).unwrap();
    let files: Vec<_> = raw.filter_map(|e| e.ok()).collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].file_name().to_string_lossy().ends_with("_cli.jsonl"));
}
