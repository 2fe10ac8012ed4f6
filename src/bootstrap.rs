use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::constants::{BOOTSTRAP_SUBCOMMAND, DEFAULT_BOOTSTRAP_PROGRAM};
use crate::error::{Error, Result};

/// Initializes a freshly created project directory.
///
/// Implementations either succeed or fail as a whole; cleanup of the
/// directory is the caller's job.
pub trait Bootstrapper {
    fn bootstrap(&self, target_dir: &Path) -> Result<()>;

    /// Human readable command line, used in logs and error messages.
    fn describe(&self, target_dir: &Path) -> String;
}

/// Runs an external program as `<program> <args..> <target_dir>`.
#[derive(Debug, Clone)]
pub struct CommandBootstrapper {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandBootstrapper {
    pub fn new<S: Into<OsString>>(program: S) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg<S: Into<OsString>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// `<program> init <dir>`, the uv way of bootstrapping a project.
    pub fn uv<S: Into<OsString>>(program: S) -> Self {
        Self::new(program).arg(BOOTSTRAP_SUBCOMMAND)
    }
}

impl Default for CommandBootstrapper {
    fn default() -> Self {
        Self::uv(DEFAULT_BOOTSTRAP_PROGRAM)
    }
}

impl Bootstrapper for CommandBootstrapper {
    /// # Notes
    /// - stdout and stderr are captured, never shown on success
    /// - Non-zero exit codes and spawn failures are both `BootstrapFailed`
    fn bootstrap(&self, target_dir: &Path) -> Result<()> {
        let command_line = self.describe(target_dir);
        log::debug!("Running bootstrap command: {command_line}");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(target_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::BootstrapFailed {
                command: command_line.clone(),
                reason: format!("could not start: {e}"),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            log::debug!("Bootstrap stdout: {}", stdout.trim());
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("exited with {}", output.status),
                detail => format!("exited with {}: {detail}", output.status),
            };
            return Err(Error::BootstrapFailed { command: command_line, reason });
        }

        Ok(())
    }

    fn describe(&self, target_dir: &Path) -> String {
        let mut parts = vec![self.program.to_string_lossy().into_owned()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.push(target_dir.display().to_string());
        parts.join(" ")
    }
}
