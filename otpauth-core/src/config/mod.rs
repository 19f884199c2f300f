//! Configuration module
//!
//! Handles loading and saving CLI defaults from TOML files.
//! Secrets are never part of the configuration.

use serde::{Deserialize, Serialize};

use crate::otp::base32::DEFAULT_SECRET_LENGTH;
use crate::otp::options::{
    validate_digits, OtpOptions, VerifyOptions, DEFAULT_DIGITS, DEFAULT_TIME_STEP,
    DEFAULT_WINDOW, MAX_WINDOW,
};
use crate::types::HashAlgorithm;

pub mod toml_config;

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpauthConfig {
    /// Defaults applied when a CLI flag is not given
    #[serde(default)]
    pub defaults: Defaults,
}

impl OtpauthConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.defaults.validate()
    }
}

/// Default generation, verification and provisioning parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Time step in seconds (default: 30)
    pub time_step: u64,

    /// Code length (default: 6)
    pub digits: u32,

    /// HMAC algorithm (default: SHA-1)
    pub algorithm: HashAlgorithm,

    /// Verification window in steps (default: 1)
    pub window: u64,

    /// Length of generated secrets in characters (default: 32)
    pub secret_length: usize,

    /// Issuer used for provisioning URIs when none is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            digits: DEFAULT_DIGITS,
            algorithm: HashAlgorithm::Sha1,
            window: DEFAULT_WINDOW,
            secret_length: DEFAULT_SECRET_LENGTH,
            issuer: None,
        }
    }
}

impl Defaults {
    /// Validate the defaults
    pub fn validate(&self) -> Result<(), String> {
        if self.time_step == 0 {
            return Err("Time step cannot be zero".to_string());
        }

        validate_digits(self.digits).map_err(|e| e.to_string())?;

        if self.window > MAX_WINDOW {
            return Err(format!("Window cannot exceed {}", MAX_WINDOW));
        }

        if self.secret_length == 0 {
            return Err("Secret length cannot be zero".to_string());
        }

        if let Some(issuer) = &self.issuer {
            if issuer.trim().is_empty() {
                return Err("Issuer cannot be empty".to_string());
            }
        }

        Ok(())
    }

    /// Generation options built from these defaults
    pub fn otp_options(&self) -> OtpOptions {
        OtpOptions::new()
            .with_time_step(self.time_step)
            .with_digits(self.digits)
            .with_algorithm(self.algorithm)
    }

    /// Verification options built from these defaults
    pub fn verify_options(&self) -> VerifyOptions {
        VerifyOptions::from(self.otp_options()).with_window(self.window)
    }
}
