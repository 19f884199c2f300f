//! Error types for the otpauth toolkit
//!
//! This module defines all error types used throughout the library and CLI,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// Main error type for the otpauth application
#[derive(Error, Debug)]
pub enum OtpauthError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to OTP generation and verification
    #[error("OTP error: {0}")]
    Otp(#[from] OtpError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save configuration file: {path}")]
    SaveFailed { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// OTP operation errors
///
/// None of these variants carry secret material.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Invalid Base32 secret")]
    InvalidEncoding,

    #[error("Unsupported HMAC algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("System time error")]
    TimeError,
}

impl OtpError {
    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OtpauthError>;
