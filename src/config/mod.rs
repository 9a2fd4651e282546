// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings management.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. dwenv.toml (cwd, skipped with --no-default-settings)
//! 3. --settings FILE (repeatable, in order)
//! 4. CLI flags
//! ```
//!
//! # Example
//!
//! ```toml
//! [global]
//! output_log_level = 3
//! log_file = "dwenv.log"
//!
//! [build]
//! platform = "linux"
//! remove = ["PYTHONPATH"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::DwenvResult;

use loader::ConfigLoader;
use types::{BuildSettings, GlobalSettings};

/// Name of the settings file picked up from the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "dwenv.toml";

/// Complete application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Logging options.
    pub global: GlobalSettings,
    /// Build defaults.
    pub build: BuildSettings,
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dwenv::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("dwenv.toml")
    ///     .add_toml_file("ci/dwenv.toml")
    ///     .build()?;
    /// # Ok::<(), dwenv::error::DwenvError>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DwenvResult<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> DwenvResult<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format settings for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let fmt_path = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };
        let fmt_list = |v: &[String]| v.join(", ");

        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file", fmt_path(&self.global.log_file));
        options.insert(
            "build.platform",
            self.build
                .platform
                .as_ref()
                .map_or_else(String::new, ToString::to_string),
        );
        options.insert(
            "build.override_warnings",
            self.build.override_warnings.to_string(),
        );
        options.insert("build.remove", fmt_list(&self.build.remove));
        options.insert("build.initial", fmt_list(&self.build.initial));
        options.insert("build.start_env", fmt_path(&self.build.start_env));
        options.insert(
            "build.start_env_backup",
            fmt_path(&self.build.start_env_backup),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
