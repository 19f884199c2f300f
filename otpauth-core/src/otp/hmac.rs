//! HMAC provider used by the HOTP engine
//!
//! The engine never hashes anything itself. It asks an [`HmacProvider`] for
//! `HMAC(algorithm, key, message)` and only works on the returned bytes.
//! [`RustCryptoHmac`] is the default provider, backed by the RustCrypto
//! `hmac`, `sha1` and `sha2` crates.
//!
//! Reference: https://www.ietf.org/rfc/rfc2104.txt

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::error::OtpError;
use crate::types::HashAlgorithm;

/// Keyed-HMAC signing capability
///
/// Implementations must be deterministic and return 20, 32 or 64 bytes for
/// SHA-1, SHA-256 and SHA-512 respectively.
pub trait HmacProvider: Send + Sync {
    fn sign(
        &self,
        algorithm: HashAlgorithm,
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, OtpError>;
}

/// Default [`HmacProvider`] built on the RustCrypto primitives
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoHmac;

fn compute<M: Mac + KeyInit>(
    algorithm: HashAlgorithm,
    key: &[u8],
    message: &[u8],
) -> Result<Vec<u8>, OtpError> {
    let mut mac = <M as KeyInit>::new_from_slice(key).map_err(|_| {
        OtpError::UnsupportedAlgorithm {
            name: algorithm.to_string(),
        }
    })?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

impl HmacProvider for RustCryptoHmac {
    fn sign(
        &self,
        algorithm: HashAlgorithm,
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, OtpError> {
        match algorithm {
            HashAlgorithm::Sha1 => compute::<Hmac<Sha1>>(algorithm, key, message),
            HashAlgorithm::Sha256 => compute::<Hmac<Sha256>>(algorithm, key, message),
            HashAlgorithm::Sha512 => compute::<Hmac<Sha512>>(algorithm, key, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(algorithm: HashAlgorithm, key: &[u8], data: &[u8]) -> String {
        hex::encode(RustCryptoHmac.sign(algorithm, key, data).unwrap())
    }

    #[test]
    fn test_hmac_sha1_rfc2202_test_case_1() {
        // key = 0x0b * 20, data = "Hi There"
        assert_eq!(
            sign(HashAlgorithm::Sha1, &[0x0b; 20], b"Hi There"),
            "b617318655057264e28bc0b6fb378c8ef146be00"
        );
    }

    #[test]
    fn test_hmac_sha1_rfc2202_test_case_2() {
        assert_eq!(
            sign(HashAlgorithm::Sha1, b"Jefe", b"what do ya want for nothing?"),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
    }

    #[test]
    fn test_hmac_sha1_rfc2202_test_case_3() {
        // key = 0xaa * 20, data = 0xdd * 50
        assert_eq!(
            sign(HashAlgorithm::Sha1, &[0xaa; 20], &[0xdd; 50]),
            "125d7342b9ac11cd91a39af48aa17b4f63f175d3"
        );
    }

    #[test]
    fn test_hmac_sha256_rfc4231_test_case_2() {
        assert_eq!(
            sign(HashAlgorithm::Sha256, b"Jefe", b"what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hmac_sha512_rfc4231_test_case_2() {
        assert_eq!(
            sign(HashAlgorithm::Sha512, b"Jefe", b"what do ya want for nothing?"),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_output_lengths() {
        for algorithm in HashAlgorithm::ALL {
            let mac = RustCryptoHmac.sign(algorithm, &[0xaa; 80], b"").unwrap();
            assert_eq!(mac.len(), algorithm.output_len());
        }
    }
}
