//! Verify command implementation
//!
//! Checks a submitted code against a secret. Prints `valid` or `invalid`;
//! the process exit status carries the same answer.

use clap::Args;
use colored::Colorize;
use otpauth_core::config::OtpauthConfig;
use otpauth_core::error::OtpauthError;
use otpauth_core::{verify_delta, VerifyOptions};
use serde::Serialize;
use tracing::info;

use super::{parse_timestamp, OtpArgs};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Code to check
    pub token: String,

    /// Base32-encoded shared secret
    pub secret: String,

    #[command(flatten)]
    pub otp: OtpArgs,

    /// Steps accepted on each side of the current one
    #[arg(short, long)]
    pub window: Option<u64>,

    /// Evaluate at this time (milliseconds since epoch or RFC 3339)
    #[arg(long, value_parser = parse_timestamp)]
    pub at: Option<u64>,

    /// Print JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct VerifyOutput {
    valid: bool,
    delta: Option<i64>,
}

/// Run the verify command, returning whether the code matched
pub fn run_verify(args: &VerifyArgs, config: &OtpauthConfig) -> Result<bool, OtpauthError> {
    let mut options = VerifyOptions::from(args.otp.options(config))
        .with_window(args.window.unwrap_or(config.defaults.window));
    options.otp.timestamp = args.at;

    let delta = verify_delta(&args.token, &args.secret, &options)?;
    if let Some(delta) = delta {
        info!(delta, "Code accepted");
    }

    if args.json {
        let output = VerifyOutput {
            valid: delta.is_some(),
            delta,
        };
        let json = serde_json::to_string(&output).map_err(std::io::Error::from)?;
        println!("{}", json);
    } else if delta.is_some() {
        println!("{}", "valid".green());
    } else {
        println!("{}", "invalid".red());
    }

    Ok(delta.is_some())
}
