//! Logging setup.
//!
//! The engine only talks to the `log` facade. Binaries and tests that want
//! output call [`init_logging`] once; library code never installs a logger.

mod init;

pub use init::{init_logging, LoggingConfig};
