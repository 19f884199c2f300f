//! URI command implementation
//!
//! Prints the `otpauth://` provisioning URI for an account. Rendering it as
//! a QR code is left to the caller.

use clap::Args;
use otpauth_core::config::OtpauthConfig;
use otpauth_core::error::{OtpError, OtpauthError};
use otpauth_core::{build_uri, ProvisioningParams};

use super::OtpArgs;

#[derive(Args, Debug)]
pub struct UriArgs {
    /// Base32-encoded shared secret
    pub secret: String,

    /// Account name shown in the authenticator app
    #[arg(long)]
    pub account: String,

    /// Issuer (service) name; falls back to the configured default
    #[arg(long)]
    pub issuer: Option<String>,

    #[command(flatten)]
    pub otp: OtpArgs,
}

/// Run the uri command
pub fn run_uri(args: &UriArgs, config: &OtpauthConfig) -> Result<(), OtpauthError> {
    let issuer = args
        .issuer
        .clone()
        .or_else(|| config.defaults.issuer.clone())
        .ok_or_else(|| OtpError::InvalidParameter {
            message: "issuer is required (pass --issuer or set defaults.issuer)".to_string(),
        })?;

    let options = args.otp.options(config);
    let params = ProvisioningParams::new(args.account.as_str(), issuer, args.secret.as_str())
        .with_digits(options.digits)
        .with_period(options.time_step)
        .with_algorithm(options.algorithm);

    println!("{}", build_uri(&params));

    Ok(())
}
