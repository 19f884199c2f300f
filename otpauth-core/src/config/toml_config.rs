//! TOML configuration file I/O
//!
//! Handles loading and saving otpauth defaults to/from TOML files
//! in the user's configuration directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::OtpauthConfig;
use crate::error::{ConfigError, OtpauthError};

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "OTPAUTH_CONFIG_DIR";

/// Get the default configuration directory
///
/// Returns `~/.config/otpauth`, or `OTPAUTH_CONFIG_DIR` if set
pub fn get_config_dir() -> Result<PathBuf, OtpauthError> {
    if let Ok(config_dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        OtpauthError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("otpauth"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, OtpauthError> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Check if a configuration file exists
pub fn config_exists() -> Result<bool, OtpauthError> {
    let config_path = get_config_path()?;
    Ok(config_path.exists())
}

/// Load configuration from the default file
///
/// A missing file is not an error: built-in defaults are returned instead.
pub fn load_config() -> Result<OtpauthConfig, OtpauthError> {
    let config_path = get_config_path()?;
    if !config_path.exists() {
        debug!("No configuration file at {:?}, using defaults", config_path);
        return Ok(OtpauthConfig::default());
    }
    load_config_from_path(&config_path)
}

/// Load configuration from a specific TOML file
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<OtpauthConfig, OtpauthError> {
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => OtpauthError::Config(ConfigError::LoadFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        }),
        _ => OtpauthError::Config(ConfigError::IoError {
            message: format!("Failed to read config file: {}", e),
        }),
    })?;

    let config: OtpauthConfig = toml::from_str(&contents)?;

    config
        .validate()
        .map_err(|e| OtpauthError::Config(ConfigError::ValidationError { message: e }))?;

    info!("Loaded configuration from {:?}", path.as_ref());
    Ok(config)
}

/// Save configuration to a specific TOML file
pub fn save_config_to_path<P: AsRef<Path>>(
    config: &OtpauthConfig,
    path: P,
) -> Result<(), OtpauthError> {
    config
        .validate()
        .map_err(|e| OtpauthError::Config(ConfigError::ValidationError { message: e }))?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            OtpauthError::Config(ConfigError::IoError {
                message: format!("Failed to create config directory: {}", e),
            })
        })?;
    }

    let contents = toml::to_string_pretty(config)?;

    std::fs::write(&path, contents).map_err(|_| {
        OtpauthError::Config(ConfigError::SaveFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        })
    })?;

    info!("Saved configuration to {:?}", path.as_ref());
    Ok(())
}

/// Save configuration to the default file
pub fn save_config(config: &OtpauthConfig) -> Result<(), OtpauthError> {
    let config_path = get_config_path()?;
    save_config_to_path(config, &config_path)
}
