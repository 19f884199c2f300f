//! otpauth - HOTP/TOTP command-line tool
//!
//! Generates secrets and one-time codes, verifies codes against a clock
//! window, and builds `otpauth://` provisioning URIs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use otpauth_core::{error::OtpauthError, init_logging};

mod cli;

#[derive(Parser)]
#[command(name = "otpauth")]
#[command(about = "Generate and verify HOTP/TOTP one-time passwords")]
struct Cli {
    /// Path to a configuration file (default: ~/.config/otpauth/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random Base32 secret
    Secret(cli::secret::SecretArgs),
    /// Print the current code for a secret
    Code(cli::code::CodeArgs),
    /// Check a code against a secret
    Verify(cli::verify::VerifyArgs),
    /// Build an otpauth:// provisioning URI
    Uri(cli::uri::UriArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    if let Err(e) = init_logging(level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let result = cli::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Secret(args) => cli::secret::run_secret(&args, &config).map(|()| 0),
        Commands::Code(args) => cli::code::run_code(&args, &config).map(|()| 0),
        Commands::Verify(args) => {
            cli::verify::run_verify(&args, &config).map(|valid| if valid { 0 } else { 1 })
        }
        Commands::Uri(args) => cli::uri::run_uri(&args, &config).map(|()| 0),
    });

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let exit_code = match e {
                // Bad input or configuration (exit code 2)
                OtpauthError::Config(_)
                | OtpauthError::Toml(_)
                | OtpauthError::TomlSerialize(_)
                | OtpauthError::Otp(_) => 2,
                // IO errors (exit code 1 - runtime)
                OtpauthError::Io(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
