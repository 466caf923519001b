//! Configuration management for chanvars
//!
//! Settings come from environment variables with defaults, and command-line
//! arguments override them.
//!
//! # Environment Variables
//!
//! - `CHANVARS_OUT`: Output file path - default: "variables.json"
//! - `CHANVARS_PRETTY`: Pretty-print the JSON output (true|false) - default: "false"
//! - `CHANVARS_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use chanvars::ChanvarsConfig;
//! use std::path::PathBuf;
//!
//! let config = ChanvarsConfig {
//!     base: PathBuf::from("/usr/src/freeswitch"),
//!     ..ChanvarsConfig::default()
//! };
//! config.validate().expect("Invalid configuration");
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Default values for configuration
pub const DEFAULT_OUT: &str = "variables.json";
pub const DEFAULT_DIR: &str = "src";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_PRETTY: bool = false;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn is_valid_log_level(level: &str) -> bool {
    VALID_LOG_LEVELS.contains(&level)
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct ChanvarsConfig {
    /// Root of the source tree
    pub base: PathBuf,

    /// Directories relative to `base` to traverse
    pub dirs: Vec<String>,

    /// Output file
    pub out: PathBuf,

    /// Pretty-print the JSON output
    pub pretty: bool,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ChanvarsConfig {
    /// Loads CHANVARS_* environment variables, falling back to defaults
    fn default() -> Self {
        let out = env::var("CHANVARS_OUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUT));

        let pretty = env::var("CHANVARS_PRETTY")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_PRETTY);

        let log_level = env::var("CHANVARS_LOG_LEVEL")
            .ok()
            .map(|v| v.to_lowercase())
            .filter(|v| is_valid_log_level(v))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            base: PathBuf::from("."),
            dirs: vec![DEFAULT_DIR.to_string()],
            out,
            pretty,
            log_level,
        }
    }
}

impl ChanvarsConfig {
    /// Builds the directory list: `src` first, then `extra` in order, with
    /// every `src` entry dropped when `exclude_src` is set
    pub fn resolve_dirs(extra: &[String], exclude_src: bool) -> Vec<String> {
        std::iter::once(DEFAULT_DIR.to_string())
            .chain(extra.iter().cloned())
            .filter(|d| !(exclude_src && d == DEFAULT_DIR))
            .collect()
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if there is nothing to scan, the output path is
    /// empty, or the log level is unknown
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dirs.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "No directories to scan. Pass --dir when using --exclude-src".to_string(),
            ));
        }

        if self.out.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Output path must not be empty".to_string(),
            ));
        }

        if !is_valid_log_level(&self.log_level) {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}. Valid options: {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

impl fmt::Display for ChanvarsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chanvars Configuration:")?;
        writeln!(f, "  Base: {}", self.base.display())?;
        writeln!(f, "  Dirs: {}", self.dirs.join(", "))?;
        writeln!(f, "  Out: {}", self.out.display())?;
        writeln!(f, "  Pretty: {}", self.pretty)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
