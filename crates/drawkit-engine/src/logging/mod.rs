//! Logger initialization.
//!
//! Library code only talks to the `log` facade; binaries pick the backend here.

mod init;

pub use init::{LoggingConfig, init_logging};
