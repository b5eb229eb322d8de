//! Server process launching
//!
//! Starts `node server.js` from the launcher directory with the configured
//! environment and the terminal's standard streams.

use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};

use tracing::{debug, info};

use crate::config::LaunchConfig;
use crate::error::{Error, Result};

/// Program used to run the server
pub const SERVER_PROGRAM: &str = "node";

/// Server entry script, relative to the working directory
pub const SERVER_ENTRY: &str = "server.js";

/// Handle to the spawned server process
///
/// The launcher does not signal, restart or supervise the child. The only
/// thing it can do is wait for it to go away.
#[derive(Debug)]
pub struct ChildProcessHandle {
    child: Child,
}

impl ChildProcessHandle {
    /// OS process id of the server
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Block until the server exits
    pub fn wait(mut self) -> Result<ExitStatus> {
        Ok(self.child.wait()?)
    }
}

/// Starts the server process
#[derive(Debug, Clone)]
pub struct Launcher {
    config: LaunchConfig,
}

impl Launcher {
    /// Create a launcher for the given config
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    /// The config this launcher uses
    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Human-readable form of the server command
    pub fn command_line(&self) -> String {
        format!("{} {}", SERVER_PROGRAM, SERVER_ENTRY)
    }

    /// Build the server command without running it
    ///
    /// The child gets exactly the environment from
    /// [`LaunchConfig::process_environment`], and all three standard streams
    /// are inherited.
    pub fn command(&self) -> Command {
        let env = self.config.process_environment();

        let mut cmd = Command::new(SERVER_PROGRAM);
        cmd.arg(SERVER_ENTRY)
            .current_dir(&self.config.working_dir)
            .env_clear()
            .envs(&env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Start the server and return as soon as the process exists
    pub fn spawn(&self) -> Result<ChildProcessHandle> {
        let working_dir: &Path = &self.config.working_dir;

        for (key, value) in self.config.overrides() {
            debug!("{}={}", key, value);
        }
        debug!(
            "Running '{}' in {}",
            self.command_line(),
            working_dir.display()
        );

        let child = self.command().spawn().map_err(|source| Error::Spawn {
            command: self.command_line(),
            working_dir: working_dir.to_path_buf(),
            source,
        })?;

        info!(
            "Started {} (pid {}) on port {}",
            SERVER_ENTRY,
            child.id(),
            self.config.port
        );

        Ok(ChildProcessHandle { child })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DATABASE_URL, DATABASE_URL_VAR, PORT_VAR};
    use std::ffi::{OsStr, OsString};

    fn env_of(cmd: &Command, key: &str) -> Option<OsString> {
        cmd.get_envs()
            .find(|(k, _)| *k == OsStr::new(key))
            .and_then(|(_, v)| v.map(OsStr::to_os_string))
    }

    #[test]
    fn test_command_program_and_args() {
        let launcher = Launcher::new(LaunchConfig::new("/srv/resend").port("9000"));
        let cmd = launcher.command();

        assert_eq!(cmd.get_program(), "node");
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(args, vec![OsStr::new("server.js")]);
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/srv/resend")));
    }

    #[test]
    fn test_command_environment() {
        let launcher = Launcher::new(LaunchConfig::new("/srv/resend").port("9000"));
        let cmd = launcher.command();

        assert_eq!(env_of(&cmd, PORT_VAR), Some(OsString::from("9000")));
        assert_eq!(
            env_of(&cmd, DATABASE_URL_VAR),
            Some(OsString::from(DATABASE_URL))
        );
    }

    #[test]
    fn test_command_line() {
        let launcher = Launcher::new(LaunchConfig::new("/srv"));
        assert_eq!(launcher.command_line(), "node server.js");
    }

    #[test]
    fn test_spawn_missing_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let launcher = Launcher::new(LaunchConfig::new(&missing));

        match launcher.spawn() {
            Err(Error::Spawn {
                command,
                working_dir,
                ..
            }) => {
                assert_eq!(command, "node server.js");
                assert_eq!(working_dir, missing);
            }
            other => panic!("expected spawn error, got {:?}", other),
        }
    }
}
