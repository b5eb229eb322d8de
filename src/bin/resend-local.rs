//! resend-local - starts the local Resend server

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use resend_local::cli::{Cli, VERSION};
use resend_local::config::launcher_dir;
use resend_local::Launcher;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", VERSION);
        return Ok(());
    }

    // Logs go to stderr; stdout belongs to the server
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let working_dir = launcher_dir().context("Failed to locate launcher directory")?;
    let launcher = Launcher::new(cli.into_config(working_dir));

    let child = launcher
        .spawn()
        .with_context(|| format!("Failed to start {}", launcher.command_line()))?;

    // Stay alive while the server runs so it keeps the terminal
    match child.wait() {
        Ok(status) => debug!("Server exited with {}", status),
        Err(e) => warn!("Lost track of server process: {}", e),
    }

    Ok(())
}
