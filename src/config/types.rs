// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.
//!
//! ```text
//! Settings: GlobalSettings ([global]), BuildSettings ([build])
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::env::types::Platform;
use crate::logging::LogLevel;

/// `[global]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalSettings {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// `[build]` section, defaults for the launch flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSettings {
    /// Target platform; the host platform when unset.
    pub platform: Option<Platform>,
    /// Warn when a `=` directive replaces an existing variable.
    pub override_warnings: bool,
    /// Variables removed from the starting environment.
    pub remove: Vec<String>,
    /// Whitelist of host variables to start from.
    pub initial: Vec<String>,
    /// JSON snapshot to start from instead of the host environment.
    pub start_env: Option<PathBuf>,
    /// Where to write the starting environment before removals.
    pub start_env_backup: Option<PathBuf>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            platform: None,
            override_warnings: true,
            remove: Vec::new(),
            initial: Vec::new(),
            start_env: None,
            start_env_backup: None,
        }
    }
}
