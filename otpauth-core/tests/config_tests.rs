//! Unit tests for configuration parsing and validation

use otpauth_core::config::{Defaults, OtpauthConfig};
use otpauth_core::HashAlgorithm;

#[test]
fn test_default_config_is_valid() {
    assert!(OtpauthConfig::default().validate().is_ok());
}

#[test]
fn test_empty_file_uses_defaults() {
    let config: OtpauthConfig = toml::from_str("").unwrap();
    assert_eq!(config, OtpauthConfig::default());
}

#[test]
fn test_partial_defaults_table() {
    let config: OtpauthConfig = toml::from_str(
        r#"
[defaults]
digits = 8
algorithm = "sha256"
issuer = "Example"
"#,
    )
    .unwrap();

    assert_eq!(config.defaults.digits, 8);
    assert_eq!(config.defaults.algorithm, HashAlgorithm::Sha256);
    assert_eq!(config.defaults.time_step, 30);
    assert_eq!(config.defaults.window, 1);
    assert_eq!(config.defaults.issuer.as_deref(), Some("Example"));
}

#[test]
fn test_unknown_algorithm_rejected() {
    let result = toml::from_str::<OtpauthConfig>("[defaults]\nalgorithm = \"MD5\"\n");
    assert!(result.is_err());
}

#[test]
fn test_negative_values_rejected() {
    assert!(toml::from_str::<OtpauthConfig>("[defaults]\ntime_step = -30\n").is_err());
    assert!(toml::from_str::<OtpauthConfig>("[defaults]\nwindow = -1\n").is_err());
}

#[test]
fn test_zero_time_step() {
    let defaults = Defaults {
        time_step: 0,
        ..Defaults::default()
    };
    assert_eq!(defaults.validate().unwrap_err(), "Time step cannot be zero");
}

#[test]
fn test_digits_out_of_range() {
    let defaults = Defaults {
        digits: 12,
        ..Defaults::default()
    };
    assert!(defaults.validate().is_err());
}

#[test]
fn test_empty_issuer() {
    let defaults = Defaults {
        issuer: Some("  ".to_string()),
        ..Defaults::default()
    };
    assert_eq!(defaults.validate().unwrap_err(), "Issuer cannot be empty");
}

#[test]
fn test_defaults_to_options() {
    let defaults = Defaults {
        time_step: 60,
        digits: 8,
        algorithm: HashAlgorithm::Sha512,
        window: 2,
        ..Defaults::default()
    };
    let options = defaults.verify_options();
    assert_eq!(options.otp.time_step, 60);
    assert_eq!(options.otp.digits, 8);
    assert_eq!(options.otp.algorithm, HashAlgorithm::Sha512);
    assert_eq!(options.otp.timestamp, None);
    assert_eq!(options.window, 2);
}

#[test]
fn test_algorithm_serializes_hyphenated() {
    let serialized = toml::to_string(&OtpauthConfig::default()).unwrap();
    assert!(serialized.contains("algorithm = \"SHA-1\""));
}
