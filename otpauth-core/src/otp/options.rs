//! Generation and verification options
//!
//! Defaults follow RFC 6238 and what authenticator apps assume when a
//! provisioning URI omits a parameter.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::OtpError;
use crate::types::HashAlgorithm;

/// Default time step in seconds (RFC 6238 §4)
pub const DEFAULT_TIME_STEP: u64 = 30;

/// Default number of code digits
pub const DEFAULT_DIGITS: u32 = 6;

/// Default number of steps accepted on either side of the current one
pub const DEFAULT_WINDOW: u64 = 1;

/// Largest digit count whose modulus stays below the 31-bit truncation range
pub const MAX_DIGITS: u32 = 9;

/// Upper bound on the verification window
pub const MAX_WINDOW: u64 = 100;

/// Options shared by code generation and verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpOptions {
    /// Counter granularity in seconds
    pub time_step: u64,
    /// Code length
    pub digits: u32,
    /// Milliseconds since the Unix epoch, `None` for the current time
    pub timestamp: Option<u64>,
    /// HMAC hash function
    pub algorithm: HashAlgorithm,
}

impl Default for OtpOptions {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            digits: DEFAULT_DIGITS,
            timestamp: None,
            algorithm: HashAlgorithm::Sha1,
        }
    }
}

impl OtpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_step(mut self, time_step: u64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_timestamp(mut self, timestamp_millis: u64) -> Self {
        self.timestamp = Some(timestamp_millis);
        self
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> Result<(), OtpError> {
        if self.time_step == 0 {
            return Err(OtpError::invalid_parameter("time step must be positive"));
        }
        validate_digits(self.digits)
    }

    /// Timestamp in milliseconds, falling back to the system clock
    pub fn resolve_timestamp(&self) -> Result<u64, OtpError> {
        match self.timestamp {
            Some(timestamp) => Ok(timestamp),
            None => {
                let elapsed = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_err(|_| OtpError::TimeError)?;
                u64::try_from(elapsed.as_millis()).map_err(|_| OtpError::TimeError)
            }
        }
    }

    /// TOTP counter: `floor(timestamp_ms / 1000 / time_step)`
    pub fn counter(&self) -> Result<u64, OtpError> {
        self.validate()?;
        let seconds = self.resolve_timestamp()? / 1000;
        Ok(seconds / self.time_step)
    }

    /// Whole seconds left before the counter advances
    pub fn time_remaining(&self) -> Result<u64, OtpError> {
        self.validate()?;
        let seconds = self.resolve_timestamp()? / 1000;
        Ok(self.time_step - seconds % self.time_step)
    }
}

/// Options for verification: generation options plus the tolerance window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyOptions {
    pub otp: OtpOptions,
    /// Steps checked on each side of the current counter
    pub window: u64,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            otp: OtpOptions::default(),
            window: DEFAULT_WINDOW,
        }
    }
}

impl From<OtpOptions> for VerifyOptions {
    fn from(otp: OtpOptions) -> Self {
        Self {
            otp,
            window: DEFAULT_WINDOW,
        }
    }
}

impl VerifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: u64) -> Self {
        self.window = window;
        self
    }

    pub fn with_time_step(mut self, time_step: u64) -> Self {
        self.otp.time_step = time_step;
        self
    }

    pub fn with_digits(mut self, digits: u32) -> Self {
        self.otp.digits = digits;
        self
    }

    pub fn with_timestamp(mut self, timestamp_millis: u64) -> Self {
        self.otp.timestamp = Some(timestamp_millis);
        self
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.otp.algorithm = algorithm;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> Result<(), OtpError> {
        self.otp.validate()?;
        if self.window > MAX_WINDOW {
            return Err(OtpError::invalid_parameter(format!(
                "window must not exceed {}",
                MAX_WINDOW
            )));
        }
        Ok(())
    }
}

/// Check that `digits` is within `1..=MAX_DIGITS`
pub fn validate_digits(digits: u32) -> Result<(), OtpError> {
    if digits == 0 {
        return Err(OtpError::invalid_parameter("digits must be positive"));
    }
    if digits > MAX_DIGITS {
        return Err(OtpError::invalid_parameter(format!(
            "digits must not exceed {}",
            MAX_DIGITS
        )));
    }
    Ok(())
}
