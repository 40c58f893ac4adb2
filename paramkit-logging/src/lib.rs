//! Logging initialisation for paramkit services
//!
//! Library crates only emit `tracing` events; binaries call
//! [`init_logging_from_config`] once at startup to install a subscriber.

pub mod init;

pub use init::{build_env_filter, init_logging_from_config};
