//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::{LaunchConfig, DEFAULT_PORT};

/// Launcher version, printed by `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "resend-local")]
#[command(about = "Run the local Resend server")]
#[command(disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Port to run the server on
    #[arg(short, long, default_value = DEFAULT_PORT)]
    pub port: String,

    /// Print version
    #[arg(short = 'V', long)]
    pub version: bool,
}

impl Cli {
    /// Turn the parsed arguments into a launch config for `working_dir`
    pub fn into_config(self, working_dir: impl Into<PathBuf>) -> LaunchConfig {
        LaunchConfig::new(working_dir).port(self.port)
    }
}
