//! `otpauth://` provisioning URI generation
//!
//! Format: `otpauth://totp/ISSUER:ACCOUNT?secret=BASE32&issuer=ISSUER&algorithm=SHA1&digits=6&period=30`
//!
//! The label is percent-encoded as a single path segment (`:` and `@`
//! included). Query values use form encoding, so spaces become `+`, which
//! is what authenticator apps expect for the issuer.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;
use url::form_urlencoded;

use crate::otp::options::{DEFAULT_DIGITS, DEFAULT_TIME_STEP};
use crate::types::{HashAlgorithm, OtpSecret};

/// Everything except the characters `encodeURIComponent` leaves alone
const LABEL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Parameters embedded in a provisioning URI
#[derive(Debug, Clone)]
pub struct ProvisioningParams {
    pub account_name: String,
    pub issuer: String,
    pub secret: OtpSecret,
    pub digits: u32,
    /// Time step in seconds
    pub period: u64,
    pub algorithm: HashAlgorithm,
}

impl ProvisioningParams {
    /// Create parameters with the default digits, period and algorithm
    pub fn new(
        account_name: impl Into<String>,
        issuer: impl Into<String>,
        secret: impl Into<OtpSecret>,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            issuer: issuer.into(),
            secret: secret.into(),
            digits: DEFAULT_DIGITS,
            period: DEFAULT_TIME_STEP,
            algorithm: HashAlgorithm::Sha1,
        }
    }

    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_period(mut self, period: u64) -> Self {
        self.period = period;
        self
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Build the `otpauth://totp/...` URI for `params`
///
/// The secret is embedded as given. A malformed secret only surfaces when a
/// client later decodes it.
pub fn build_uri(params: &ProvisioningParams) -> String {
    let label = format!("{}:{}", params.issuer, params.account_name);
    let label = utf8_percent_encode(&label, LABEL_ENCODE_SET);

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("secret", params.secret.expose())
        .append_pair("issuer", &params.issuer)
        .append_pair("algorithm", params.algorithm.uri_name())
        .append_pair("digits", &params.digits.to_string())
        .append_pair("period", &params.period.to_string())
        .finish();

    debug!(
        algorithm = %params.algorithm,
        digits = params.digits,
        period = params.period,
        "Built provisioning URI"
    );

    format!("otpauth://totp/{label}?{query}")
}
