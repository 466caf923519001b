//! Utility modules for chanvars

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
