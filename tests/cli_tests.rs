//! Integration tests for the otpauth binary
//!
//! Each test points `OTPAUTH_CONFIG_DIR` at a fresh temp directory so the
//! user's own configuration never leaks in.

use std::fs;
use std::process::{Command, Output};

const OTPAUTH_BINARY: &str = env!("CARGO_BIN_EXE_otpauth");

/// RFC 6238 SHA-1 key
const SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

fn run(config_dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(OTPAUTH_BINARY)
        .args(args)
        .env("OTPAUTH_CONFIG_DIR", config_dir)
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("JOURNAL_STREAM")
        .output()
        .expect("Failed to run otpauth")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_help_lists_subcommands() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(temp_dir.path(), &["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    for subcommand in ["secret", "code", "verify", "uri"] {
        assert!(text.contains(subcommand), "help should mention {}", subcommand);
    }
}

#[test]
fn test_secret_default_length() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(temp_dir.path(), &["secret"]);

    assert!(output.status.success());
    let secret = stdout(&output);
    assert_eq!(secret.len(), 32);
    assert!(secret
        .chars()
        .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c)));
}

#[test]
fn test_secret_custom_length() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(temp_dir.path(), &["secret", "--length", "16"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).len(), 16);
}

#[test]
fn test_code_at_fixed_time() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(temp_dir.path(), &["code", SECRET, "--at", "59000", "--digits", "8"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "94287082");
}

#[test]
fn test_code_rfc3339_time_and_algorithm() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(
        temp_dir.path(),
        &["code", SECRET, "--at", "1970-01-01T00:00:59Z", "--algorithm", "SHA-1"],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "287082");
}

#[test]
fn test_code_json_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(temp_dir.path(), &["code", SECRET, "--at", "59000", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["code"], "287082");
    assert_eq!(value["counter"], 1);
    assert_eq!(value["remaining"], 1);
}

#[test]
fn test_code_invalid_secret_exit_code() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(temp_dir.path(), &["code", "12345"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid Base32 secret"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_code_empty_key_exit_code() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(temp_dir.path(), &["code", "A", "--at", "0"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_verify_valid_and_invalid() {
    let temp_dir = tempfile::tempdir().unwrap();

    let valid = run(temp_dir.path(), &["verify", "755224", SECRET, "--at", "59000"]);
    assert_eq!(valid.status.code(), Some(0));
    assert_eq!(stdout(&valid), "valid");

    let invalid = run(temp_dir.path(), &["verify", "000000", SECRET, "--at", "59000"]);
    assert_eq!(invalid.status.code(), Some(1));
    assert_eq!(stdout(&invalid), "invalid");
}

#[test]
fn test_verify_window_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(
        temp_dir.path(),
        &["verify", "755224", SECRET, "--at", "59000", "--window", "0"],
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_verify_json_reports_delta() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(
        temp_dir.path(),
        &["verify", "359152", SECRET, "--at", "59000", "--json"],
    );

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["valid"], true);
    assert_eq!(value["delta"], 1);
    // adjacent-step matches are routine and stay out of default logging
    assert!(output.stderr.is_empty());
}

#[test]
fn test_uri_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(
        temp_dir.path(),
        &[
            "uri",
            "JBSWY3DPEHPK3PXP",
            "--account",
            "info@rabbit-company.com",
            "--issuer",
            "Rabbit Company",
        ],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "otpauth://totp/Rabbit%20Company%3Ainfo%40rabbit-company.com\
         ?secret=JBSWY3DPEHPK3PXP&issuer=Rabbit+Company&algorithm=SHA1&digits=6&period=30"
    );
}

#[test]
fn test_uri_requires_issuer() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run(
        temp_dir.path(),
        &["uri", "JBSWY3DPEHPK3PXP", "--account", "alice"],
    );
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_defaults_apply() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[defaults]\ndigits = 8\nissuer = \"Example\"\nsecret_length = 20\n",
    )
    .unwrap();

    let code = run(temp_dir.path(), &["code", SECRET, "--at", "59000"]);
    assert_eq!(stdout(&code), "94287082");

    let secret = run(temp_dir.path(), &["secret"]);
    assert_eq!(stdout(&secret).len(), 20);

    let uri = run(temp_dir.path(), &["uri", SECRET, "--account", "alice"]);
    assert!(stdout(&uri).starts_with("otpauth://totp/Example%3Aalice?"));
    assert!(stdout(&uri).ends_with("digits=8&period=30"));
}

#[test]
fn test_invalid_config_exit_code() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[defaults]\ntime_step = 0\n",
    )
    .unwrap();

    let output = run(temp_dir.path(), &["secret"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_explicit_missing_config_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("missing.toml");
    let output = run(
        temp_dir.path(),
        &["--config", missing.to_str().unwrap(), "secret"],
    );
    assert_eq!(output.status.code(), Some(2));
}
