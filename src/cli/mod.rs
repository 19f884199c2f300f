//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands and the
//! arguments they share.

use std::path::Path;

use clap::Args;
use otpauth_core::config::{toml_config, OtpauthConfig};
use otpauth_core::error::OtpauthError;
use otpauth_core::{HashAlgorithm, OtpOptions};

pub mod code;
pub mod secret;
pub mod uri;
pub mod verify;

/// Load the configuration from `path`, or the default location
pub fn load_config(path: Option<&Path>) -> Result<OtpauthConfig, OtpauthError> {
    match path {
        Some(path) => toml_config::load_config_from_path(path),
        None => toml_config::load_config(),
    }
}

/// Code parameters shared by `code`, `verify` and `uri`
///
/// Unset flags fall back to the configuration defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct OtpArgs {
    /// Number of digits in the code
    #[arg(short, long)]
    pub digits: Option<u32>,

    /// Time step in seconds
    #[arg(short, long)]
    pub period: Option<u64>,

    /// HMAC algorithm: SHA-1, SHA-256 or SHA-512
    #[arg(short, long)]
    pub algorithm: Option<HashAlgorithm>,
}

impl OtpArgs {
    /// Merge flags over configuration defaults
    pub fn options(&self, config: &OtpauthConfig) -> OtpOptions {
        let defaults = &config.defaults;
        OtpOptions::new()
            .with_time_step(self.period.unwrap_or(defaults.time_step))
            .with_digits(self.digits.unwrap_or(defaults.digits))
            .with_algorithm(self.algorithm.unwrap_or(defaults.algorithm))
    }
}

/// Parse `--at` as milliseconds since the epoch or an RFC 3339 date-time
pub fn parse_timestamp(value: &str) -> Result<u64, String> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        return value
            .parse::<u64>()
            .map_err(|e| format!("invalid millisecond timestamp: {}", e));
    }

    let datetime = chrono::DateTime::parse_from_rfc3339(value)
        .map_err(|e| format!("expected milliseconds or RFC 3339 date-time: {}", e))?;
    u64::try_from(datetime.timestamp_millis())
        .map_err(|_| "timestamp must not be before 1970-01-01".to_string())
}
