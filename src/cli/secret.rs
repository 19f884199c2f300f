//! Secret command implementation
//!
//! Prints a freshly generated Base32 secret to stdout.

use clap::Args;
use otpauth_core::config::OtpauthConfig;
use otpauth_core::error::OtpauthError;
use otpauth_core::generate_secret;

#[derive(Args, Debug)]
pub struct SecretArgs {
    /// Secret length in Base32 characters
    #[arg(short, long)]
    pub length: Option<usize>,
}

/// Run the secret command
pub fn run_secret(args: &SecretArgs, config: &OtpauthConfig) -> Result<(), OtpauthError> {
    let length = args.length.unwrap_or(config.defaults.secret_length);
    let secret = generate_secret(length)?;

    // Output only the secret to stdout (machine-parsable)
    println!("{}", secret.expose());

    Ok(())
}
