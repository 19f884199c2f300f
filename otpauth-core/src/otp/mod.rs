//! One-time password module
//!
//! Handles the Base32 secret codec, HMAC signing, HOTP/TOTP computation and
//! provisioning URIs.

pub mod base32;
pub mod hmac;
pub mod hotp;
pub mod options;
pub mod totp;
pub mod uri;
