//! Error types for the launcher
//!
//! This module defines all error types raised while preparing and starting
//! the server process.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the launcher
#[derive(Error, Debug)]
pub enum Error {
    // ========== Location Errors ==========
    #[error("Location error: cannot determine launcher path")]
    LauncherLocation(#[source] std::io::Error),

    #[error("Location error: launcher path '{}' has no parent directory", .0.display())]
    NoParentDirectory(PathBuf),

    // ========== Process Errors ==========
    #[error("Spawn error: failed to start '{command}' in '{}'", .working_dir.display())]
    Spawn {
        command: String,
        working_dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ========== I/O Errors ==========
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for launcher operations
pub type Result<T> = std::result::Result<T, Error>;
