//! chanvars - channel variable extraction for FreeSWITCH documentation
//!
//! Walks a FreeSWITCH source tree and finds every channel variable name passed
//! to `switch_channel_get_variable`, `switch_channel_set_variable` and
//! friends. It resolves `#define` constants and collects each variable with
//! every place it is referenced.
//!
//! # Example
//!
//! ```no_run
//! use chanvars::{RealFileSystem, VariableScanner, VariablesDocument};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let result = VariableScanner::new(RealFileSystem::new(), "/usr/src/freeswitch")?
//!     .with_dirs(["src"])
//!     .scan()?;
//!
//! for m in &result.needs_review {
//!     println!("{} {}", m.location(), m.raw);
//! }
//!
//! let version = chanvars::version::describe(Path::new("/usr/src/freeswitch"));
//! let doc = VariablesDocument::new(result.index, version);
//! println!("{}", doc);
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`fs`]: file system abstraction with real and in-memory implementations
//! - [`extractors`]: per-file pattern matching for call sites and `#define`s
//! - [`scan`]: tree walk, constant substitution and the variable index
//! - [`output`]: the JSON document written at the end of a run
//! - [`cli`]: command-line arguments, handler and console reports

pub mod cli;
pub mod config;
pub mod extractors;
pub mod fs;
pub mod output;
pub mod scan;
pub mod util;
pub mod version;

pub use config::{ChanvarsConfig, ConfigError};
pub use extractors::{DefineExtractor, VariableExtractor, VariableMatch};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use output::{OutputError, VariablesDocument};
pub use scan::{ScanError, ScanResult, Source, Variable, VariableIndex, VariableScanner};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_chanvars() {
        assert_eq!(NAME, "chanvars");
    }
}
