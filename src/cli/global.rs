// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options: settings files and logging.
//!
//! # Option Precedence
//!
//! ```text
//! --settings FILE       ← Additional settings files (can repeat)
//! --no-default-settings ← Skip ./dwenv.toml
//! --log-level N         ← Console verbosity (0-6)
//! --file-log-level N    ← File verbosity (defaults to --log-level)
//! --log-file FILE       ← Enables file logging
//!
//! Precedence: CLI flags > --settings > dwenv.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::DEFAULT_SETTINGS_FILE;
use crate::config::loader::ConfigLoader;
use crate::error::DwenvResult;

/// Global options.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times; later files win.
    #[arg(long = "settings", value_name = "FILE", action = clap::ArgAction::Append)]
    pub settings: Vec<PathBuf>,

    /// Disables loading `dwenv.toml` from the current directory.
    #[arg(long = "no-default-settings")]
    pub no_default_settings: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Collects the settings sources named by these options, in load order.
    #[must_use]
    pub fn config_loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new();
        if !self.no_default_settings {
            loader = loader.add_toml_file_optional(DEFAULT_SETTINGS_FILE);
        }
        for path in &self.settings {
            loader = loader.add_toml_file(path);
        }
        loader
    }

    /// Applies the logging flags on top of `loader`'s sources.
    ///
    /// # Errors
    ///
    /// Returns an error if an override key is rejected by the loader.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> DwenvResult<ConfigLoader> {
        if let Some(level) = self.log_level {
            loader = loader.set("global.output_log_level", i64::from(level))?;
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            loader = loader.set("global.file_log_level", i64::from(level))?;
        }

        if let Some(ref path) = self.log_file {
            loader = loader.set("global.log_file", path.display().to_string())?;
        }

        Ok(loader)
    }
}
