// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new(program, env) / arg / args / shell_args
//!  • resolve_program: explicit path must exist, bare name via the env's PATH
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{error, trace};

use crate::core::env::container::Env;
use crate::error::ProcessError;

/// Output from a completed process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOutput {
    exit_code: i32,
}

impl ProcessOutput {
    pub(super) const fn new(exit_code: i32) -> Self {
        Self { exit_code }
    }

    /// Returns the process exit code, `-1` if it was killed by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Builder for configuring and running a process.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    /// Executable name or path
    program: PathBuf,
    /// Command-line arguments
    args: Vec<String>,
    /// Complete environment of the child
    env: Env,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` running `program` with exactly `env`.
    ///
    /// A bare name is resolved against the `PATH` of `env` when `run()` is
    /// called.
    pub fn new(program: impl AsRef<Path>, env: Env) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            env,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string_lossy().into_owned());
        }
        self
    }

    /// Appends arguments split from a single shell-style string.
    ///
    /// Quotes group words (`-m "a b"` is two arguments); no other shell
    /// processing happens.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::InvalidArguments` on unbalanced quotes or a
    /// trailing escape.
    pub fn shell_args(self, line: &str) -> Result<Self, ProcessError> {
        let words = shlex::split(line)
            .ok_or_else(|| ProcessError::InvalidArguments(line.to_string()))?;
        Ok(self.args(words))
    }

    /// Finds the executable to spawn.
    ///
    /// Programs given with a directory component are used as-is when they
    /// exist. Bare names are looked up in the `PATH` of the environment.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if the explicit path does
    /// not exist or no `PATH` entry holds the program; every `PATH` entry is
    /// logged.
    pub fn resolve_program(&self) -> Result<PathBuf, ProcessError> {
        let search_path = self.env.get("PATH").unwrap_or_default();

        if self.program.components().count() > 1 {
            if self.program.exists() {
                return Ok(self.program.clone());
            }
            return Err(self.not_found(search_path));
        }

        match which::which_in(&self.program, Some(search_path), ".") {
            Ok(path) => {
                trace!(program = %self.program.display(), resolved = %path.display(), "resolved");
                Ok(path)
            }
            Err(_) => Err(self.not_found(search_path)),
        }
    }

    fn not_found(&self, search_path: &str) -> ProcessError {
        error!(program = %self.program.display(), "executable not found");
        for entry in std::env::split_paths(search_path) {
            error!(entry = %entry.display(), "searched PATH entry");
        }
        ProcessError::ExecutableNotFound {
            command: self.program.display().to_string(),
            path: search_path.to_string(),
        }
    }

    // Getters for field access within the process module

    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    #[must_use]
    pub fn args_slice(&self) -> &[String] {
        &self.args
    }

    pub(super) const fn environment(&self) -> &Env {
        &self.env
    }
}
