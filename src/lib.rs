//! resend-local - launcher for the local Resend server
//!
//! This library provides the pieces used by the `resend-local` binary:
//! - Command-line parsing
//! - Launch configuration and child environment
//! - Spawning `node server.js` with inherited standard streams

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;

pub use config::LaunchConfig;
pub use error::{Error, Result};
pub use launcher::{ChildProcessHandle, Launcher};
