//! Code command implementation
//!
//! Prints the TOTP code for a secret, either bare or as JSON with the
//! seconds left in the current step.

use clap::Args;
use otpauth_core::config::OtpauthConfig;
use otpauth_core::error::OtpauthError;
use otpauth_core::{current_counter, generate_code, time_remaining};
use serde::Serialize;

use super::{parse_timestamp, OtpArgs};

#[derive(Args, Debug)]
pub struct CodeArgs {
    /// Base32-encoded shared secret
    pub secret: String,

    #[command(flatten)]
    pub otp: OtpArgs,

    /// Evaluate at this time (milliseconds since epoch or RFC 3339)
    #[arg(long, value_parser = parse_timestamp)]
    pub at: Option<u64>,

    /// Print JSON instead of the bare code
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CodeOutput<'a> {
    code: &'a str,
    counter: u64,
    remaining: u64,
}

/// Run the code command
pub fn run_code(args: &CodeArgs, config: &OtpauthConfig) -> Result<(), OtpauthError> {
    let mut options = args.otp.options(config);
    // Pin the clock once so code, counter and remaining agree
    let timestamp = match args.at {
        Some(at) => at,
        None => options.resolve_timestamp()?,
    };
    options.timestamp = Some(timestamp);

    let code = generate_code(&args.secret, &options)?;

    if args.json {
        let output = CodeOutput {
            code: code.expose(),
            counter: current_counter(&options)?,
            remaining: time_remaining(&options)?,
        };
        let json = serde_json::to_string(&output).map_err(std::io::Error::from)?;
        println!("{}", json);
    } else {
        println!("{}", code.expose());
    }

    Ok(())
}
