//! Logging setup.
//!
//! Everything logs through the `log` facade; this module installs `env_logger`
//! as the backend once, early in `main`.

mod init;

pub use init::{LoggingConfig, init_logging};
