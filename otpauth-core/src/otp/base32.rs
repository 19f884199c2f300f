//! Base32 secret codec
//!
//! Decoding is lenient in the way authenticator apps expect:
//! 1. Strip trailing `=` padding
//! 2. Case-fold to uppercase
//! 3. Reject anything outside the RFC 4648 alphabet `A-Z2-7`
//! 4. Emit whole bytes only; leftover bits are dropped
//! 5. Reject input that yields no key bytes at all

use base32::Alphabet;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, warn};

use crate::error::OtpError;
use crate::types::{OtpSecret, SecretKey};

/// RFC 4648 Base32 alphabet
pub const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Default length (in characters) of generated secrets
pub const DEFAULT_SECRET_LENGTH: usize = 32;

const ALPHABET: Alphabet = Alphabet::RFC4648 { padding: false };

/// Strip trailing padding and uppercase
fn normalize(input: &str) -> String {
    input.trim_end_matches('=').to_ascii_uppercase()
}

fn is_base32_char(c: char) -> bool {
    c.is_ascii_uppercase() || ('2'..='7').contains(&c)
}

/// Decode a Base32 secret into raw key bytes
///
/// Fails with [`OtpError::InvalidEncoding`] when any character left after
/// stripping trailing padding is not in the alphabet, or when the input is
/// too short to produce a single byte.
pub fn decode_base32(input: &str) -> Result<SecretKey, OtpError> {
    let normalized = normalize(input);

    if !normalized.chars().all(is_base32_char) {
        warn!("Rejected secret containing non-Base32 characters");
        return Err(OtpError::InvalidEncoding);
    }

    let bytes = base32::decode(ALPHABET, &normalized).ok_or(OtpError::InvalidEncoding)?;
    if bytes.is_empty() {
        warn!("Rejected secret that decodes to an empty key");
        return Err(OtpError::InvalidEncoding);
    }
    debug!(key_len = bytes.len(), "Decoded Base32 secret");

    Ok(SecretKey::new(bytes))
}

/// Encode raw key bytes as unpadded Base32
pub fn encode_base32(bytes: &[u8]) -> String {
    base32::encode(ALPHABET, bytes)
}

/// Generate a random Base32 secret of `length` characters
///
/// Each character is drawn from one byte of the OS CSPRNG reduced modulo 32.
/// Since 256 is a multiple of 32 every character is uniformly distributed.
pub fn generate_secret(length: usize) -> Result<OtpSecret, OtpError> {
    if length == 0 {
        return Err(OtpError::invalid_parameter("secret length must be positive"));
    }

    let mut bytes = vec![0u8; length];
    OsRng.fill_bytes(&mut bytes);

    let secret: String = bytes
        .iter()
        .map(|b| char::from(BASE32_ALPHABET[usize::from(b % 32)]))
        .collect();

    debug!(length, "Generated random secret");
    Ok(OtpSecret::new(secret))
}
