// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for dwenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! dwenv [global options] -c <CONFIG>... -x <EXECUTABLE> [launch options]
//!
//! dwenv -c tools.env -x python -a "-m pip list"
//! dwenv -c base.envc -c extra.envc -x cmake --dry-run
//! ```

pub mod global;
pub mod launch;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::launch::LaunchArgs;
use clap::Parser;

/// Layered Environment Launcher
///
/// Builds an environment from `.envc` fragments and launches a program in it.
#[derive(Debug, Parser)]
#[command(
    name = "dwenv",
    author,
    version,
    about = "Layered Environment Launcher",
    long_about = "dwenv-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds an environment by applying configuration fragments in\n\
                  order, then launches an executable inside it. Use --dry-run to\n\
                  print the environment instead of launching.",
    after_help = "CONFIG FILES:\n\n\
                  A `.envc` fragment holds one `NAME[.PLATFORM] OP VALUE` directive\n\
                  per line, where OP is ` = ` (set), ` > ` (append) or ` < ` (prepend).\n\
                  A `.env` list file names one fragment per line. Passing --config\n\
                  several times applies the given fragments in order.\n\n\
                  SETTINGS:\n\n\
                  dwenv reads `dwenv.toml` from the current directory, then every\n\
                  --settings file. Use --no-default-settings to skip `dwenv.toml`."
)]
pub struct Cli {
    /// Logging and settings options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// What to build and launch
    #[command(flatten)]
    pub launch: LaunchArgs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
