//! HOTP (HMAC-based One-Time Password) engine, RFC 4226
//!
//! `code = Truncate(HMAC(K, C)) mod 10^digits` where `C` is the 8-byte
//! big-endian counter.

use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::OtpError;
use crate::otp::base32::decode_base32;
use crate::otp::hmac::{HmacProvider, RustCryptoHmac};
use crate::otp::options::{validate_digits, OtpOptions, VerifyOptions};
use crate::types::{HashAlgorithm, OtpCode};

/// OTP engine bound to an [`HmacProvider`]
///
/// Holds no state besides the provider, so a single engine can serve any
/// number of secrets and threads.
#[derive(Debug, Clone, Default)]
pub struct OtpEngine<P = RustCryptoHmac> {
    provider: P,
}

impl<P: HmacProvider> OtpEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Compute the HOTP code for raw key bytes and a counter
    pub fn hotp(
        &self,
        key: &[u8],
        counter: u64,
        digits: u32,
        algorithm: HashAlgorithm,
    ) -> Result<OtpCode, OtpError> {
        validate_digits(digits)?;

        let mac = self.provider.sign(algorithm, key, &counter.to_be_bytes())?;
        let binary = dynamic_truncate(&mac).ok_or_else(|| OtpError::UnsupportedAlgorithm {
            name: algorithm.to_string(),
        })?;

        let code = binary % 10u32.pow(digits);
        let width = digits as usize;
        Ok(OtpCode::new(format!("{code:0>width$}")))
    }

    /// Compute the HOTP code for a Base32 secret
    ///
    /// Only `digits` and `algorithm` are read from `options`.
    pub fn generate_hotp(
        &self,
        secret: &str,
        counter: u64,
        options: &OtpOptions,
    ) -> Result<OtpCode, OtpError> {
        let key = decode_base32(secret)?;
        self.hotp(key.expose(), counter, options.digits, options.algorithm)
    }

    /// Verify a counter-based token with look-ahead
    ///
    /// Checks `counter..=counter + window` in order and returns the counter
    /// that matched, so the caller can store `matched + 1` as the next
    /// expected value.
    pub fn verify_hotp(
        &self,
        token: &str,
        secret: &str,
        counter: u64,
        options: &VerifyOptions,
    ) -> Result<Option<u64>, OtpError> {
        options.validate()?;
        let key = decode_base32(secret)?;

        debug!(
            algorithm = %options.otp.algorithm,
            digits = options.otp.digits,
            window = options.window,
            counter,
            "Verifying HOTP token"
        );

        for step in 0..=options.window {
            let Some(candidate) = counter.checked_add(step) else {
                break;
            };
            let expected = self.hotp(
                key.expose(),
                candidate,
                options.otp.digits,
                options.otp.algorithm,
            )?;
            if codes_match(&expected, token) {
                debug!(counter = candidate, "HOTP token matched");
                return Ok(Some(candidate));
            }
        }

        debug!("HOTP token did not match any counter in window");
        Ok(None)
    }
}

/// RFC 4226 §5.3 dynamic truncation
///
/// Returns `None` when the MAC is too short for the selected offset.
fn dynamic_truncate(mac: &[u8]) -> Option<u32> {
    let offset = usize::from(mac.last()? & 0x0F);
    let bytes = mac.get(offset..offset + 4)?;
    Some(u32::from_be_bytes([
        bytes[0] & 0x7F,
        bytes[1],
        bytes[2],
        bytes[3],
    ]))
}

/// Constant-time comparison of a generated code against a submitted token
///
/// Length is not secret, so a length mismatch returns early.
pub(crate) fn codes_match(expected: &OtpCode, token: &str) -> bool {
    let expected = expected.expose().as_bytes();
    let token = token.as_bytes();
    expected.len() == token.len() && bool::from(expected.ct_eq(token))
}

/// Compute the HOTP code for raw key bytes with the default provider
pub fn hotp(
    key: &[u8],
    counter: u64,
    digits: u32,
    algorithm: HashAlgorithm,
) -> Result<OtpCode, OtpError> {
    OtpEngine::<RustCryptoHmac>::default().hotp(key, counter, digits, algorithm)
}

/// Compute the HOTP code for a Base32 secret with the default provider
pub fn generate_hotp(secret: &str, counter: u64, options: &OtpOptions) -> Result<OtpCode, OtpError> {
    OtpEngine::<RustCryptoHmac>::default().generate_hotp(secret, counter, options)
}

/// Verify a counter-based token with the default provider
pub fn verify_hotp(
    token: &str,
    secret: &str,
    counter: u64,
    options: &VerifyOptions,
) -> Result<Option<u64>, OtpError> {
    OtpEngine::<RustCryptoHmac>::default().verify_hotp(token, secret, counter, options)
}
