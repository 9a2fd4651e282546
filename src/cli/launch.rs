// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launch arguments.
//!
//! ```text
//! -c a.env             --> ConfigsInput::ListFile
//! -c a.envc            --> ConfigsInput::Fragment
//! -c a.envc -c b.envc  --> ConfigsInput::Explicit([a, b])
//! -a "-m 'x y'"        --> ["-m", "x y"]
//! ```
//!
//! Flags left unset fall back to the `[build]` settings section.

use clap::{ArgAction, Args};
use std::path::PathBuf;

use crate::core::env::types::Platform;

/// Arguments selecting the configuration and the program to launch.
#[derive(Debug, Clone, Default, Args)]
pub struct LaunchArgs {
    /// Configuration: a `.env` list file, a `.envc` fragment, or several
    /// fragments applied in order.
    #[arg(short = 'c', long = "config", value_name = "PATH", required = true, action = ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Executable to launch, looked up in the built PATH.
    #[arg(short = 'x', long = "executable", value_name = "PATH")]
    pub executable: PathBuf,

    /// Arguments for the executable, as one shell-style string.
    #[arg(
        short = 'a',
        long = "arguments",
        value_name = "STRING",
        allow_hyphen_values = true
    )]
    pub arguments: Option<String>,

    /// Builds and prints the environment without launching.
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// Removes a variable from the starting environment (can repeat).
    #[arg(short = 'r', long = "remove", value_name = "VAR", action = ArgAction::Append)]
    pub remove: Vec<String>,

    /// Starts from only these host variables (can repeat).
    #[arg(long = "initial", value_name = "VAR", action = ArgAction::Append)]
    pub initial: Vec<String>,

    /// Target platform for `NAME.PLATFORM` filters and list separators.
    #[arg(short = 'p', long = "platform", value_name = "NAME")]
    pub platform: Option<Platform>,

    /// Silences warnings when `=` replaces an existing variable.
    #[arg(long = "no-override-warnings")]
    pub no_override_warnings: bool,

    /// Starts from a JSON snapshot instead of the current environment.
    #[arg(long = "start-env", value_name = "FILE")]
    pub start_env: Option<PathBuf>,

    /// Writes the starting environment to a JSON file before removals.
    #[arg(long = "backup-start-env", value_name = "FILE")]
    pub backup_start_env: Option<PathBuf>,
}
