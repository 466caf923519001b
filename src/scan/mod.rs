//! Source tree scanning
//!
//! [`VariableScanner`] walks the configured directories and runs the
//! extractors over every relevant file. It then folds the raw matches into a
//! [`VariableIndex`] keyed by variable name.

pub mod constants;
pub mod index;
pub mod scanner;

pub use constants::{ConstantTable, Replacement};
pub use index::{Source, Variable, VariableIndex};
pub use scanner::{ScanResult, VariableScanner};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Base path does not exist: {0}")]
    BaseNotFound(PathBuf),
    #[error("Base path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Directory to scan does not exist: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },
}
