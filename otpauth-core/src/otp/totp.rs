//! TOTP (Time-based One-Time Password) generation and verification
//!
//! Implements RFC 6238 on top of the HOTP engine: the counter is
//! `floor(timestamp_ms / 1000 / time_step)` and verification accepts codes
//! from `window` steps on either side of it to absorb clock drift.

use tracing::debug;

use crate::error::OtpError;
use crate::otp::base32::decode_base32;
use crate::otp::hmac::{HmacProvider, RustCryptoHmac};
use crate::otp::hotp::{codes_match, OtpEngine};
use crate::otp::options::{OtpOptions, VerifyOptions};
use crate::types::OtpCode;

impl<P: HmacProvider> OtpEngine<P> {
    /// Generate the code for a Base32 secret at `options.timestamp`
    pub fn generate_code(&self, secret: &str, options: &OtpOptions) -> Result<OtpCode, OtpError> {
        options.validate()?;
        let key = decode_base32(secret)?;
        let counter = options.counter()?;

        debug!(
            algorithm = %options.algorithm,
            digits = options.digits,
            time_step = options.time_step,
            counter,
            "Generating TOTP code"
        );

        self.hotp(key.expose(), counter, options.digits, options.algorithm)
    }

    /// Find the step offset at which `token` matches, if any
    ///
    /// Offsets are tried from `-window` up to `+window` and the first match
    /// wins. Counters that would underflow zero or overflow `u64` are skipped.
    pub fn verify_delta(
        &self,
        token: &str,
        secret: &str,
        options: &VerifyOptions,
    ) -> Result<Option<i64>, OtpError> {
        options.validate()?;
        let key = decode_base32(secret)?;
        let counter = options.otp.counter()?;
        let window = i64::try_from(options.window)
            .map_err(|_| OtpError::invalid_parameter("window out of range"))?;

        debug!(
            algorithm = %options.otp.algorithm,
            digits = options.otp.digits,
            time_step = options.otp.time_step,
            window,
            counter,
            "Verifying TOTP code"
        );

        for delta in -window..=window {
            let Some(step) = counter.checked_add_signed(delta) else {
                continue;
            };
            let expected = self.hotp(
                key.expose(),
                step,
                options.otp.digits,
                options.otp.algorithm,
            )?;
            if codes_match(&expected, token) {
                debug!(delta, "TOTP code matched");
                return Ok(Some(delta));
            }
        }

        debug!("TOTP code did not match any step in window");
        Ok(None)
    }

    /// Verify `token` against the current step and its neighbours
    ///
    /// A mismatch is `Ok(false)`; only malformed input is an error.
    pub fn verify_code(
        &self,
        token: &str,
        secret: &str,
        options: &VerifyOptions,
    ) -> Result<bool, OtpError> {
        Ok(self.verify_delta(token, secret, options)?.is_some())
    }
}

/// Generate a TOTP code with the default HMAC provider
pub fn generate_code(secret: &str, options: &OtpOptions) -> Result<OtpCode, OtpError> {
    OtpEngine::<RustCryptoHmac>::default().generate_code(secret, options)
}

/// Verify a TOTP code with the default HMAC provider
pub fn verify_code(token: &str, secret: &str, options: &VerifyOptions) -> Result<bool, OtpError> {
    OtpEngine::<RustCryptoHmac>::default().verify_code(token, secret, options)
}

/// Step offset of a matching TOTP code with the default HMAC provider
pub fn verify_delta(
    token: &str,
    secret: &str,
    options: &VerifyOptions,
) -> Result<Option<i64>, OtpError> {
    OtpEngine::<RustCryptoHmac>::default().verify_delta(token, secret, options)
}

/// Current TOTP counter for `options`
pub fn current_counter(options: &OtpOptions) -> Result<u64, OtpError> {
    options.counter()
}

/// Seconds until the code for `options` changes
pub fn time_remaining(options: &OtpOptions) -> Result<u64, OtpError> {
    options.time_remaining()
}
