// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Starting environment sourcing.
//!
//! ```text
//! StartEnv::Current  --> host snapshot
//! StartEnv::Map(env) --> env
//! StartEnv::File(p)  --> JSON object {"NAME": "value", ...}
//! StartEnv::Empty    --> {}
//!        |
//!        v
//!   backup (optional JSON) --> remove vars --> initial_vars whitelist
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::configs::paths::PathResolver;
use crate::core::env::container::Env;
use crate::error::{DwenvResult, EnvError};

/// Where a build takes its starting environment from.
#[derive(Debug, Clone, Default)]
pub enum StartEnv {
    /// The host snapshot.
    #[default]
    Current,
    /// An explicit environment.
    Map(Env),
    /// A JSON snapshot file.
    File(PathBuf),
    /// No variables.
    Empty,
}

impl StartEnv {
    /// Produces the environment this source describes.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::SnapshotRead` or `EnvError::SnapshotParse` if a
    /// snapshot file cannot be loaded.
    pub fn load(&self, host: &Env, resolver: &PathResolver) -> DwenvResult<Env> {
        match self {
            Self::Current => Ok(host.clone()),
            Self::Map(env) => Ok(env.clone()),
            Self::File(path) => read_snapshot(&resolver.expand(path)),
            Self::Empty => Ok(Env::new()),
        }
    }
}

/// Reads a JSON snapshot of string variables.
///
/// # Errors
///
/// Returns `EnvError::SnapshotRead` if the file cannot be read and
/// `EnvError::SnapshotParse` if it is not a JSON object of strings.
pub fn read_snapshot(path: &Path) -> DwenvResult<Env> {
    let content = std::fs::read_to_string(path).map_err(|source| EnvError::SnapshotRead {
        path: path.display().to_string(),
        source,
    })?;
    let vars: BTreeMap<String, String> =
        serde_json::from_str(&content).map_err(|e| EnvError::SnapshotParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    Ok(Env::from_map(vars))
}

/// Writes `env` as a pretty-printed JSON snapshot.
///
/// # Errors
///
/// Returns `EnvError::SnapshotWrite` if the file cannot be written.
pub fn write_snapshot(env: &Env, path: &Path) -> DwenvResult<()> {
    let write_error = |source| EnvError::SnapshotWrite {
        path: path.display().to_string(),
        source,
    };
    let json = serde_json::to_string_pretty(&env.to_map())
        .map_err(std::io::Error::from)
        .map_err(write_error)?;
    std::fs::write(path, json).map_err(write_error)?;
    Ok(())
}

/// Keeps only `names`, taking their values from `host`.
///
/// # Errors
///
/// Returns `EnvError::KeyMissing` for the first name `host` does not define.
pub fn whitelist(host: &Env, names: &[String]) -> DwenvResult<Env> {
    let mut env = Env::new();
    for name in names {
        let value = host
            .get(name)
            .ok_or_else(|| EnvError::KeyMissing { key: name.clone() })?;
        env.set(name.clone(), value);
    }
    Ok(env)
}
