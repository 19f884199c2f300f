//! Core library for the otpauth CLI tool
//!
//! This crate implements HOTP (RFC 4226) and TOTP (RFC 6238) one-time
//! passwords: Base32 secret handling, code generation, windowed
//! verification and `otpauth://` provisioning URIs.

pub mod error;
pub mod types;

pub mod config;
pub mod otp;

pub use error::{OtpError, OtpauthError};
pub use otp::base32::{decode_base32, encode_base32, generate_secret, DEFAULT_SECRET_LENGTH};
pub use otp::hmac::{HmacProvider, RustCryptoHmac};
pub use otp::hotp::{generate_hotp, hotp, verify_hotp, OtpEngine};
pub use otp::options::{OtpOptions, VerifyOptions};
pub use otp::totp::{current_counter, generate_code, time_remaining, verify_code, verify_delta};
pub use otp::uri::{build_uri, ProvisioningParams};
pub use types::{HashAlgorithm, OtpCode, OtpSecret, SecretKey};

/// Initialize logging infrastructure
///
/// Sets up tracing with systemd journal logging when running under systemd.
/// Otherwise logs to stderr so stdout stays machine-parsable.
pub fn init_logging(level: tracing::Level) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = LevelFilter::from_level(level);

    // Try to use systemd journal logging if available
    #[cfg(target_os = "linux")]
    {
        if std::env::var("JOURNAL_STREAM").is_ok() {
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(filter)
                .try_init()?;
            return Ok(());
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init()?;

    Ok(())
}
