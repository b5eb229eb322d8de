//! Launch configuration
//!
//! Holds the values handed to the server process: the port, the directory it
//! runs in and the database location. The environment for the child is
//! derived from here.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default server port
pub const DEFAULT_PORT: &str = "8005";

/// Database location handed to the server
pub const DATABASE_URL: &str = "file:resend-local.sqlite";

/// Environment variable carrying the port
pub const PORT_VAR: &str = "PORT";

/// Environment variable carrying the database location
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Launch configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Port the server should listen on, forwarded verbatim
    pub port: String,
    /// Directory the server is started in
    pub working_dir: PathBuf,
    /// Database connection string
    pub database_url: String,
}

impl LaunchConfig {
    /// Create a config for the given working directory with default values
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            working_dir: working_dir.into(),
            database_url: DATABASE_URL.to_string(),
        }
    }

    /// Create a config rooted at the launcher's own directory
    pub fn from_launcher_dir() -> Result<Self> {
        Ok(Self::new(launcher_dir()?))
    }

    /// Set the port
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    /// Set the working directory
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// The variables this config forces on top of the inherited environment
    pub fn overrides(&self) -> [(&'static str, &str); 2] {
        [
            (PORT_VAR, self.port.as_str()),
            (DATABASE_URL_VAR, self.database_url.as_str()),
        ]
    }

    /// Build the child environment from `base` with `PORT` and
    /// `DATABASE_URL` replaced.
    pub fn environment<I, K, V>(&self, base: I) -> BTreeMap<OsString, OsString>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut env: BTreeMap<OsString, OsString> = base
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for (key, value) in self.overrides() {
            env.insert(key.into(), value.into());
        }

        env
    }

    /// Build the child environment from the current process environment
    pub fn process_environment(&self) -> BTreeMap<OsString, OsString> {
        self.environment(std::env::vars_os())
    }
}

/// Directory containing the running executable
pub fn launcher_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(Error::LauncherLocation)?;
    parent_dir(&exe)
}

fn parent_dir(path: &Path) -> Result<PathBuf> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
        _ => Err(Error::NoParentDirectory(path.to_path_buf())),
    }
}
