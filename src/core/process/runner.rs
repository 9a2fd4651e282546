// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()
//!   resolve_program()
//!         |
//!         v
//!   build_command()
//!   args, env_clear + env, inherited stdio
//!         |
//!         v
//!     spawn() ---------------------+
//!         |                        |
//!         v                        v
//!   select! child.wait()     ctrl_c()
//!         |                   kill child
//!         v                        |
//!   ProcessOutput            ProcessError::Interrupted
//! ```

use std::fmt::Write as _;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::error::{DwenvResult, ProcessError};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.program().file_stem().map_or_else(
            || "process".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// Returns the full command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.is_empty() || arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and waits for it to exit.
    ///
    /// A non-zero exit code is not an error; callers decide what it means.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The executable cannot be found in the environment's `PATH`.
    /// - Spawning the child process fails.
    /// - Ctrl+C is received while waiting; the child is killed first.
    pub async fn run(self) -> DwenvResult<ProcessOutput> {
        let name = self.display_name();
        let program = self.resolve_program()?;
        let cmd_line = self.command_line();

        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command(&program);
        let mut child = command
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        let pid = child.id();
        trace!(process = %name, pid = ?pid, "spawned");

        let status = tokio::select! {
            status = child.wait() => status?,
            _ = tokio::signal::ctrl_c() => {
                warn!(process = %name, "interrupted, killing process");
                if let Err(e) = child.kill().await {
                    debug!(process = %name, error = %e, "kill failed");
                }
                return Err(ProcessError::Interrupted(name).into());
            }
        };

        let exit_code = status.code().unwrap_or(-1);
        trace!(process = %name, exit_code, "completed");
        Ok(ProcessOutput::new(exit_code))
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self, program: &Path) -> Command {
        let mut command = Command::new(program);

        command.args(self.args_slice());

        command.env_clear();
        for (key, value) in self.environment().iter() {
            command.env(key, value);
        }

        command.stdin(Stdio::inherit());
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());

        command.kill_on_drop(true);
        command
    }
}
